//! # mptraj - MPtrj 训练集构建工具
//!
//! 从 Materials Project 弛豫轨迹数据集 (MPtrj) 构建过滤后的
//! 结构 + 能量/力/应力 训练集。
//!
//! ## 子命令
//! - `load`   - 构建数据集并打印统计
//! - `show`   - 查看单个结构及其标签
//! - `export` - 导出为 extended XYZ / CSV
//! - `config` - 打印或保存数据集配置
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── config/    (数据集配置与注册表)
//!   │     ├── source/    (上游数据源)
//!   │     ├── dataset/   (转换 -> 过滤 -> 物化)
//!   │     ├── formats/   (导出格式)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod config;
mod dataset;
mod error;
mod formats;
mod models;
mod source;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
