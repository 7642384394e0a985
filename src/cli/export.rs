//! # export 子命令 CLI 定义
//!
//! 导出过滤后的数据集 (extended XYZ 训练文件 / CSV 摘要)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use super::dataset::DatasetArgs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 支持的导出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// Extended XYZ with energy, forces and stress
    Extxyz,
    /// One CSV row per structure
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Extxyz => write!(f, "extxyz"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Extxyz)]
    pub format: ExportFormat,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
