//! # 输出格式模块
//!
//! 将构建好的数据集写成训练文件或摘要表。
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 使用
//! - 使用 `dataset/` 和 `models/`
//! - 子模块: extxyz, summary

pub mod extxyz;
pub mod summary;
