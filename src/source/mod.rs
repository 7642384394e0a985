//! # 数据源模块
//!
//! 定义上游原始记录的格式，以及加载某个数据划分的数据源接口。
//!
//! ## 功能
//! - `RawRecord`: MPtrj 的一条原始记录（各字段在转换时才校验）
//! - `StructureSource`: 按名称和划分加载原始记录
//! - `JsonlSource`: 读取本地缓存的 JSON Lines 划分文件
//!
//! ## 依赖关系
//! - 被 `dataset/builder.rs` 和 `commands/` 使用
//! - 子模块: jsonl, memory (仅测试)

pub mod jsonl;
#[cfg(test)]
pub mod memory;

pub use jsonl::JsonlSource;

use crate::config::Split;
use crate::error::Result;

use serde::{Deserialize, Serialize};

/// MPtrj 数据集名称
pub const MPTRAJ_SOURCE_NAME: &str = "nimashoghi/mptrj";

/// 标量或单元素数组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Scalar(f64),
    Array(Vec<f64>),
}

impl NumericValue {
    /// 取出唯一的数值
    pub fn item(&self) -> Option<f64> {
        match self {
            NumericValue::Scalar(v) => Some(*v),
            NumericValue::Array(values) if values.len() == 1 => Some(values[0]),
            NumericValue::Array(_) => None,
        }
    }
}

/// 上游原始记录
///
/// 字段全部可缺省，缺失或形状错误由转换步骤报告。未知字段被忽略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp_id: Option<String>,

    #[serde(default)]
    pub positions: Option<Vec<Vec<f64>>>,

    #[serde(default)]
    pub numbers: Option<Vec<i64>>,

    #[serde(default)]
    pub cell: Option<Vec<Vec<f64>>>,

    #[serde(default)]
    pub corrected_total_energy: Option<NumericValue>,

    #[serde(default)]
    pub forces: Option<Vec<Vec<f64>>>,

    #[serde(default)]
    pub stress: Option<Vec<Vec<f64>>>,
}

/// 数据源接口
///
/// 返回的记录按上游的原生顺序排列；该顺序在不同上游版本间不保证稳定。
pub trait StructureSource {
    fn load_split(&self, source_name: &str, split: Split) -> Result<Vec<RawRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_item() {
        assert_eq!(NumericValue::Scalar(-3.5).item(), Some(-3.5));
        assert_eq!(NumericValue::Array(vec![2.0]).item(), Some(2.0));
        assert_eq!(NumericValue::Array(vec![]).item(), None);
        assert_eq!(NumericValue::Array(vec![1.0, 2.0]).item(), None);
    }

    #[test]
    fn test_raw_record_tolerates_missing_and_extra_fields() {
        let record: RawRecord = serde_json::from_str(
            r#"{"mp_id": "mp-1", "numbers": [3, 8], "corrected_total_energy": [-4.2], "uncorrected_total_energy": 1.0}"#,
        )
        .unwrap();

        assert_eq!(record.mp_id.as_deref(), Some("mp-1"));
        assert_eq!(record.numbers, Some(vec![3, 8]));
        assert_eq!(
            record.corrected_total_energy,
            Some(NumericValue::Array(vec![-4.2]))
        );
        assert!(record.positions.is_none());
        assert!(record.forces.is_none());
    }
}
