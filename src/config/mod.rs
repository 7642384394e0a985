//! # 数据集配置模块
//!
//! 定义 MPtrj 数据集的配置对象，以及按 `type` 字段区分的数据集配置联合体。
//!
//! ## 功能
//! - 构造时校验（原子数范围、元素符号）
//! - JSON 序列化/反序列化，标签字段 `type = "mptraj"`
//! - 静态注册表：`DatasetConfig` 每个变体对应一个数据集构造器
//!
//! ## 依赖关系
//! - 被 `cli/` 和 `commands/` 使用
//! - 使用 `dataset/builder.rs` 构建数据集
//! - 使用 `models/element.rs` 校验元素符号

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::{MpTrajError, Result};
use crate::models::element;
use crate::source::StructureSource;
use crate::utils::progress::ProgressSink;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// `min_num_atoms` 的默认值
pub const DEFAULT_MIN_NUM_ATOMS: usize = 5;

/// 数据集划分
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    #[default]
    Train,
    Val,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// MPtrj 数据集配置
///
/// 只能通过校验过的构造途径获得：`new`、`Default` 或反序列化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MpTrajDatasetConfigFields")]
pub struct MpTrajDatasetConfig {
    split: Split,
    min_num_atoms: Option<usize>,
    max_num_atoms: Option<usize>,
    elements: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stress_symmetry_tolerance: Option<f64>,
}

impl Default for MpTrajDatasetConfig {
    fn default() -> Self {
        MpTrajDatasetConfig {
            split: Split::Train,
            min_num_atoms: Some(DEFAULT_MIN_NUM_ATOMS),
            max_num_atoms: None,
            elements: None,
            stress_symmetry_tolerance: None,
        }
    }
}

impl MpTrajDatasetConfig {
    /// 创建并校验配置
    pub fn new(
        split: Split,
        min_num_atoms: Option<usize>,
        max_num_atoms: Option<usize>,
        elements: Option<Vec<String>>,
    ) -> Result<Self> {
        MpTrajDatasetConfigFields {
            split,
            min_num_atoms,
            max_num_atoms,
            elements,
            stress_symmetry_tolerance: None,
        }
        .try_into()
    }

    /// 启用应力张量对称性校验
    pub fn with_stress_symmetry_tolerance(mut self, tolerance: f64) -> Result<Self> {
        validate_tolerance(tolerance)?;
        self.stress_symmetry_tolerance = Some(tolerance);
        Ok(self)
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn min_num_atoms(&self) -> Option<usize> {
        self.min_num_atoms
    }

    pub fn max_num_atoms(&self) -> Option<usize> {
        self.max_num_atoms
    }

    pub fn elements(&self) -> Option<&BTreeSet<String>> {
        self.elements.as_ref()
    }

    pub fn stress_symmetry_tolerance(&self) -> Option<f64> {
        self.stress_symmetry_tolerance
    }

    /// 构建数据集（I/O 由数据源完成）
    pub fn create_dataset<S: StructureSource + ?Sized>(
        &self,
        source: &S,
        progress: &mut dyn ProgressSink,
    ) -> Result<Dataset> {
        DatasetBuilder::new(self, source).build(progress)
    }
}

/// 反序列化中间表示，缺省字段取默认值
#[derive(Debug, Deserialize)]
#[serde(default)]
struct MpTrajDatasetConfigFields {
    split: Split,
    min_num_atoms: Option<usize>,
    max_num_atoms: Option<usize>,
    elements: Option<Vec<String>>,
    stress_symmetry_tolerance: Option<f64>,
}

impl Default for MpTrajDatasetConfigFields {
    fn default() -> Self {
        MpTrajDatasetConfigFields {
            split: Split::Train,
            min_num_atoms: Some(DEFAULT_MIN_NUM_ATOMS),
            max_num_atoms: None,
            elements: None,
            stress_symmetry_tolerance: None,
        }
    }
}

impl TryFrom<MpTrajDatasetConfigFields> for MpTrajDatasetConfig {
    type Error = MpTrajError;

    fn try_from(fields: MpTrajDatasetConfigFields) -> Result<Self> {
        if let (Some(min), Some(max)) = (fields.min_num_atoms, fields.max_num_atoms) {
            if max < min {
                return Err(MpTrajError::ConfigValidation(format!(
                    "max_num_atoms ({}) must be >= min_num_atoms ({})",
                    max, min
                )));
            }
        }

        let elements = match fields.elements {
            Some(symbols) => {
                let invalid: Vec<&str> = symbols
                    .iter()
                    .map(String::as_str)
                    .filter(|s| !element::is_valid_symbol(s))
                    .collect();
                if !invalid.is_empty() {
                    return Err(MpTrajError::ConfigValidation(format!(
                        "unknown element symbol(s): {}",
                        invalid.join(", ")
                    )));
                }
                Some(symbols.into_iter().collect())
            }
            None => None,
        };

        if let Some(tol) = fields.stress_symmetry_tolerance {
            validate_tolerance(tol)?;
        }

        Ok(MpTrajDatasetConfig {
            split: fields.split,
            min_num_atoms: fields.min_num_atoms,
            max_num_atoms: fields.max_num_atoms,
            elements,
            stress_symmetry_tolerance: fields.stress_symmetry_tolerance,
        })
    }
}

fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(MpTrajError::ConfigValidation(format!(
            "stress_symmetry_tolerance must be a finite non-negative number, got {}",
            tolerance
        )))
    }
}

// ─────────────────────────────────────────────────────────────
// 数据集注册表
// ─────────────────────────────────────────────────────────────

/// 数据集配置联合体，按 `type` 字段分派
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DatasetConfig {
    #[serde(rename = "mptraj")]
    MpTraj(MpTrajDatasetConfig),
}

impl DatasetConfig {
    /// 配置的类型标签
    pub fn type_tag(&self) -> &'static str {
        match self {
            DatasetConfig::MpTraj(_) => "mptraj",
        }
    }

    /// 按变体构建数据集
    pub fn create_dataset<S: StructureSource + ?Sized>(
        &self,
        source: &S,
        progress: &mut dyn ProgressSink,
    ) -> Result<Dataset> {
        match self {
            DatasetConfig::MpTraj(config) => config.create_dataset(source, progress),
        }
    }

    /// 序列化为格式化的 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析；结构不合法或校验失败均视为配置错误
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        serde_json::from_value(value).map_err(|e| MpTrajError::ConfigValidation(e.to_string()))
    }
}

impl From<MpTrajDatasetConfig> for DatasetConfig {
    fn from(config: MpTrajDatasetConfig) -> Self {
        DatasetConfig::MpTraj(config)
    }
}

/// 从 JSON 文件加载数据集配置
pub fn load_config_file(path: &Path) -> Result<DatasetConfig> {
    let content = fs::read_to_string(path).map_err(|e| MpTrajError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    DatasetConfig::from_json(&content)
}
