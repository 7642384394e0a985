//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `load`: 构建数据集并打印统计
//! - `show`: 查看单个结构及其标签
//! - `export`: 导出为 extended XYZ 或 CSV 摘要
//! - `config`: 打印或保存数据集配置
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: dataset, load, show, export, config

pub mod config;
pub mod dataset;
pub mod export;
pub mod load;
pub mod show;

use clap::{Parser, Subcommand};

/// mptraj - MPtrj 训练集构建工具
#[derive(Parser)]
#[command(name = "mptraj")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Build filtered MPtrj structure/label training sets",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build the dataset and print a summary
    Load(load::LoadArgs),

    /// Show one structure and its labels
    Show(show::ShowArgs),

    /// Export the dataset as extended XYZ or a CSV summary
    Export(export::ExportArgs),

    /// Print or save the dataset config as JSON
    Config(config::ConfigArgs),
}
