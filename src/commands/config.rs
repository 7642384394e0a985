//! # config 命令实现
//!
//! 打印或保存解析后的数据集配置（带 `type` 标签的 JSON）。
//!
//! ## 依赖关系
//! - 使用 `cli/config.rs` 定义的参数
//! - 使用 `config/`
//! - 使用 `utils/output.rs`

use crate::cli::config::ConfigArgs;
use crate::error::{MpTrajError, Result};
use crate::utils::output;

use std::fs;

/// 执行 config 命令
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = super::resolve_config(&args.dataset)?;
    let json = config.to_json()?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", json)).map_err(|e| MpTrajError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            output::print_success(&format!("Config written to '{}'", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
