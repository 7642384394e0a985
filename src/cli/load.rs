//! # load 子命令 CLI 定义
//!
//! 构建数据集并打印构建统计和前若干个结构。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/load.rs`

use super::dataset::DatasetArgs;
use clap::Args;

/// load 子命令参数
#[derive(Args, Debug)]
pub struct LoadArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Number of structures to list
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,
}
