//! # JSON Lines 本地缓存数据源
//!
//! 从本地缓存目录读取已下载的数据划分。
//!
//! ## 目录布局
//! ```text
//! <root>/
//!   nimashoghi/mptrj/
//!     train.jsonl              # 单文件划分
//!     val-00000-of-00002.jsonl # 或分片划分 <split>-*.jsonl
//!     val-00001-of-00002.jsonl
//! ```
//! 每行一个 JSON 对象；分片按文件名字典序读取。两种布局同时存在时报错，避免重复读入。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `glob` 查找分片，`serde_json` 解析记录

use super::{RawRecord, StructureSource};
use crate::config::Split;
use crate::error::{MpTrajError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 本地 JSON Lines 数据源
#[derive(Debug, Clone)]
pub struct JsonlSource {
    root: PathBuf,
}

impl JsonlSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 查找某个划分的所有文件（已排序）
    fn split_files(&self, source_dir: &Path, split: Split) -> Result<Vec<PathBuf>> {
        let escaped = glob::Pattern::escape(&source_dir.display().to_string());
        let single = glob_files(&format!("{}/{}.jsonl", escaped, split))?;
        let mut shards = glob_files(&format!("{}/{}-*.jsonl", escaped, split))?;

        if !single.is_empty() && !shards.is_empty() {
            return Err(MpTrajError::InvalidArgument(format!(
                "split '{}' in '{}' has both a single file and shards",
                split,
                source_dir.display()
            )));
        }

        if single.is_empty() {
            shards.sort();
            Ok(shards)
        } else {
            Ok(single)
        }
    }
}

fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| {
        MpTrajError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;
    Ok(paths.filter_map(|p| p.ok()).filter(|p| p.is_file()).collect())
}

impl StructureSource for JsonlSource {
    fn load_split(&self, source_name: &str, split: Split) -> Result<Vec<RawRecord>> {
        if !self.root.is_dir() {
            return Err(MpTrajError::SourceUnavailable {
                source_name: source_name.to_string(),
                reason: format!("cache directory '{}' does not exist", self.root.display()),
            });
        }

        let source_dir = self.root.join(source_name);
        if !source_dir.is_dir() {
            return Err(MpTrajError::SourceUnavailable {
                source_name: source_name.to_string(),
                reason: format!("'{}' is not cached locally", source_dir.display()),
            });
        }

        let files = self.split_files(&source_dir, split)?;
        if files.is_empty() {
            return Err(MpTrajError::SplitNotFound {
                source_name: source_name.to_string(),
                split: split.to_string(),
            });
        }

        log::info!(
            "Reading split '{}' of '{}' from {} file(s)",
            split,
            source_name,
            files.len()
        );

        let mut records = Vec::new();
        for file in &files {
            let content = fs::read_to_string(file).map_err(|e| MpTrajError::FileReadError {
                path: file.display().to_string(),
                source: e,
            })?;

            for (line_no, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let record: RawRecord =
                    serde_json::from_str(line).map_err(|e| MpTrajError::RecordConversion {
                        index: records.len(),
                        reason: format!("{}:{}: {}", file.display(), line_no + 1, e),
                    })?;
                records.push(record);
            }
        }

        Ok(records)
    }
}
