//! # 内存数据源（测试用）
//!
//! 以内存中的记录模拟上游数据集，可模拟数据源不可用。
//!
//! ## 依赖关系
//! - 被 `dataset/` 和 `config/` 的测试使用

use super::{RawRecord, StructureSource};
use crate::config::Split;
use crate::error::{MpTrajError, Result};

use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemorySource {
    splits: HashMap<Split, Vec<RawRecord>>,
    offline: bool,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split(mut self, split: Split, records: Vec<RawRecord>) -> Self {
        self.splits.insert(split, records);
        self
    }

    pub fn offline() -> Self {
        MemorySource {
            splits: HashMap::new(),
            offline: true,
        }
    }
}

impl StructureSource for MemorySource {
    fn load_split(&self, source_name: &str, split: Split) -> Result<Vec<RawRecord>> {
        if self.offline {
            return Err(MpTrajError::SourceUnavailable {
                source_name: source_name.to_string(),
                reason: "offline".to_string(),
            });
        }
        self.splits
            .get(&split)
            .cloned()
            .ok_or_else(|| MpTrajError::SplitNotFound {
                source_name: source_name.to_string(),
                split: split.to_string(),
            })
    }
}
