//! # show 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use super::dataset::DatasetArgs;
use clap::Args;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Index of the structure in the filtered dataset
    #[arg(long, allow_negative_numbers = true)]
    pub index: i64,
}
