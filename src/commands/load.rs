//! # load 命令实现
//!
//! 构建数据集，打印构建统计和前若干个结构的表格。
//!
//! ## 依赖关系
//! - 使用 `cli/load.rs` 定义的参数
//! - 使用 `dataset/`
//! - 使用 `utils/output.rs`

use crate::cli::load::LoadArgs;
use crate::dataset::{BuildReport, Dataset};
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结构列表行
#[derive(Debug, Clone, Tabled)]
struct StructureRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Atoms")]
    num_atoms: usize,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "E/atom (eV)")]
    energy_per_atom: String,
    #[tabled(rename = "max |F| (eV/Å)")]
    max_force: String,
}

/// 统计行
#[derive(Debug, Clone, Tabled)]
struct ReportRow {
    #[tabled(rename = "Outcome")]
    outcome: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
}

/// 执行 load 命令
pub fn execute(args: LoadArgs) -> Result<()> {
    output::print_header("Building MPtrj Dataset");

    let dataset = super::build_dataset(&args.dataset)?;

    print_report(dataset.report());

    if dataset.is_empty() {
        output::print_warning("No structures passed the configured filters.");
        return Ok(());
    }

    output::print_header(&format!(
        "First {} Structures",
        args.top_n.min(dataset.len())
    ));
    println!("{}", Table::new(structure_rows(&dataset, args.top_n)));

    output::print_done(&format!("Dataset ready: {} structures", dataset.len()));
    Ok(())
}

fn print_report(report: &BuildReport) {
    let rows = vec![
        ReportRow {
            outcome: "Records read",
            count: report.total,
        },
        ReportRow {
            outcome: "Retained",
            count: report.retained,
        },
        ReportRow {
            outcome: "Dropped: too few atoms",
            count: report.too_few_atoms,
        },
        ReportRow {
            outcome: "Dropped: too many atoms",
            count: report.too_many_atoms,
        },
        ReportRow {
            outcome: "Dropped: disallowed elements",
            count: report.disallowed_elements,
        },
    ];
    println!("{}", Table::new(rows));
}

fn structure_rows(dataset: &Dataset, top_n: usize) -> Vec<StructureRow> {
    dataset
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(i, entry)| StructureRow {
            index: i,
            name: entry.structure.name.clone(),
            formula: entry.structure.formula(),
            num_atoms: entry.structure.num_atoms(),
            energy: format!("{:.6}", entry.labels.energy),
            energy_per_atom: entry
                .labels
                .energy_per_atom()
                .map(|e| format!("{:.6}", e))
                .unwrap_or_default(),
            max_force: format!("{:.4}", entry.labels.max_force()),
        })
        .collect()
}
