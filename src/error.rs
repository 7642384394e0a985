//! # 统一错误处理模块
//!
//! 定义 mptraj 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mptraj 统一错误类型
#[derive(Error, Debug)]
pub enum MpTrajError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid dataset config: {0}")]
    ConfigValidation(String),

    // ─────────────────────────────────────────────────────────────
    // 数据源错误
    // ─────────────────────────────────────────────────────────────
    #[error("Data source '{source_name}' is unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Split '{split}' not found in data source '{source_name}'")]
    SplitNotFound { source_name: String, split: String },

    // ─────────────────────────────────────────────────────────────
    // 转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to convert record #{index}: {reason}")]
    RecordConversion { index: usize, reason: String },

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    // ─────────────────────────────────────────────────────────────
    // 访问错误
    // ─────────────────────────────────────────────────────────────
    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MpTrajError>;
