//! # 数据模型模块
//!
//! 定义周期性原子结构、单点计算标签和元素周期表。
//!
//! ## 依赖关系
//! - 被 `dataset/`, `formats/` 和 `commands/` 使用
//! - 子模块: element, structure, labels

pub mod element;
pub mod labels;
pub mod structure;

pub use labels::SinglePointLabels;
pub use structure::{Lattice, Structure};
