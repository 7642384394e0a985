//! # 数据集模块
//!
//! 构建并持有过滤后的 (结构, 标签) 训练集。
//!
//! ## 功能
//! - 原始记录转换 (`convert`)
//! - 过滤谓词 (`filter`)
//! - 构建流水线与统计 (`builder`)
//! - 构建完成后只读、定长、可随机访问的 `Dataset`
//!
//! ## 依赖关系
//! - 被 `config/`, `commands/`, `formats/` 使用
//! - 子模块: convert, filter, builder

pub mod builder;
pub mod convert;
pub mod filter;

pub use builder::{BuildReport, DatasetBuilder};

use crate::error::{MpTrajError, Result};
use crate::models::{SinglePointLabels, Structure};

/// 结构及其唯一的单点计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStructure {
    pub structure: Structure,
    pub labels: SinglePointLabels,
}

/// 已物化的数据集
#[derive(Debug)]
pub struct Dataset {
    entries: Vec<LabeledStructure>,
    report: BuildReport,
}

impl Dataset {
    pub(crate) fn new(entries: Vec<LabeledStructure>, report: BuildReport) -> Self {
        Self { entries, report }
    }

    /// 保留的结构数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按下标访问，返回共享的只读引用
    pub fn get(&self, index: usize) -> Result<(&Structure, &SinglePointLabels)> {
        self.entries
            .get(index)
            .map(|e| (&e.structure, &e.labels))
            .ok_or(MpTrajError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.entries.len(),
            })
    }

    /// 带符号下标访问；负数不回绕
    pub fn get_signed(&self, index: i64) -> Result<(&Structure, &SinglePointLabels)> {
        let out_of_range = MpTrajError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        };
        match usize::try_from(index) {
            Ok(i) => self.get(i).map_err(|_| out_of_range),
            Err(_) => Err(out_of_range),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabeledStructure> {
        self.entries.iter()
    }

    /// 构建统计
    pub fn report(&self) -> &BuildReport {
        &self.report
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LabeledStructure;
    type IntoIter = std::slice::Iter<'a, LabeledStructure>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
