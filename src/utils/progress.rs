//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并定义数据集构建使用的进度接口。
//!
//! ## 依赖关系
//! - 被 `dataset/builder.rs` 和 `commands/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 进度汇报接口
///
/// 仅用于观察，不影响构建结果。
pub trait ProgressSink {
    /// 开始处理，告知总数
    fn start(&mut self, _total: u64) {}

    /// 已处理数量增加 `increment`
    fn update(&mut self, increment: u64);

    /// 结束（成功或失败都会调用）
    fn close(&mut self);
}

impl ProgressSink for ProgressBar {
    fn start(&mut self, total: u64) {
        self.set_length(total);
    }

    fn update(&mut self, increment: u64) {
        self.inc(increment);
    }

    fn close(&mut self) {
        self.finish_and_clear();
    }
}

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}
