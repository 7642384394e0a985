//! # config 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/config.rs`

use super::dataset::DatasetArgs;
use clap::Args;
use std::path::PathBuf;

/// config 子命令参数
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the config to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
