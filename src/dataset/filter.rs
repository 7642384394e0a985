//! # 结构过滤谓词
//!
//! 按原子数和元素集合筛选结构。谓词顺序固定：最小原子数、最大原子数、元素集合。
//!
//! 元素谓词采用子集语义：结构中出现的元素必须全部属于允许集合，
//! 允许只使用其中一部分（包括一个都不用）。
//!
//! ## 依赖关系
//! - 被 `dataset/builder.rs` 调用
//! - 使用 `config/` 和 `models/structure.rs`

use crate::config::MpTrajDatasetConfig;
use crate::models::Structure;

use std::collections::BTreeSet;

/// 单个过滤谓词
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    MinNumAtoms(usize),
    MaxNumAtoms(usize),
    Elements(BTreeSet<String>),
}

/// 结构被丢弃的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    TooFewAtoms,
    TooManyAtoms,
    DisallowedElements,
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::TooFewAtoms => write!(f, "too few atoms"),
            DropReason::TooManyAtoms => write!(f, "too many atoms"),
            DropReason::DisallowedElements => write!(f, "disallowed elements"),
        }
    }
}

impl Predicate {
    /// 结构是否通过
    pub fn accepts(&self, structure: &Structure) -> bool {
        match self {
            Predicate::MinNumAtoms(min) => structure.num_atoms() >= *min,
            Predicate::MaxNumAtoms(max) => structure.num_atoms() <= *max,
            Predicate::Elements(allowed) => {
                elements_allowed(&structure.chemical_elements(), allowed)
            }
        }
    }

    pub fn drop_reason(&self) -> DropReason {
        match self {
            Predicate::MinNumAtoms(_) => DropReason::TooFewAtoms,
            Predicate::MaxNumAtoms(_) => DropReason::TooManyAtoms,
            Predicate::Elements(_) => DropReason::DisallowedElements,
        }
    }
}

/// `present` 是否为 `allowed` 的子集
pub fn elements_allowed(present: &BTreeSet<&str>, allowed: &BTreeSet<String>) -> bool {
    present.iter().all(|el| allowed.contains(*el))
}

/// 由配置生成谓词列表；未设置的字段不产生谓词
pub fn predicates_from_config(config: &MpTrajDatasetConfig) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(min) = config.min_num_atoms() {
        predicates.push(Predicate::MinNumAtoms(min));
    }
    if let Some(max) = config.max_num_atoms() {
        predicates.push(Predicate::MaxNumAtoms(max));
    }
    if let Some(elements) = config.elements() {
        predicates.push(Predicate::Elements(elements.clone()));
    }
    predicates
}

/// 依次评估谓词，返回第一个不通过的原因；全部通过返回 `None`
pub fn first_rejection(predicates: &[Predicate], structure: &Structure) -> Option<DropReason> {
    predicates
        .iter()
        .find(|p| !p.accepts(structure))
        .map(Predicate::drop_reason)
}
