//! # export 命令实现
//!
//! 将过滤后的数据集写成 extended XYZ 训练文件或 CSV 摘要。
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `formats/`
//! - 使用 `utils/output.rs`

use crate::cli::export::{ExportArgs, ExportFormat};
use crate::error::{MpTrajError, Result};
use crate::formats::{extxyz, summary};
use crate::utils::output;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header(&format!("Exporting MPtrj Dataset as {}", args.format));

    if args.output.exists() && !args.overwrite {
        return Err(MpTrajError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let dataset = super::build_dataset(&args.dataset)?;

    if dataset.is_empty() {
        output::print_warning("No structures passed the configured filters; writing an empty file.");
    }

    match args.format {
        ExportFormat::Extxyz => extxyz::write_extxyz(&dataset, &args.output)?,
        ExportFormat::Csv => summary::write_summary_csv(&dataset, &args.output)?,
    }

    output::print_done(&format!(
        "Wrote {} structures to '{}'",
        dataset.len(),
        args.output.display()
    ));
    Ok(())
}
