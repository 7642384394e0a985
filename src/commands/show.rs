//! # show 命令实现
//!
//! 打印单个结构的晶格、原子、力和应力。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `dataset/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::show::ShowArgs;
use crate::error::Result;
use crate::models::{SinglePointLabels, Structure};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 原子行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: &'static str,
    #[tabled(rename = "x (Å)")]
    x: String,
    #[tabled(rename = "y (Å)")]
    y: String,
    #[tabled(rename = "z (Å)")]
    z: String,
    #[tabled(rename = "Fx")]
    fx: String,
    #[tabled(rename = "Fy")]
    fy: String,
    #[tabled(rename = "Fz")]
    fz: String,
}

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let dataset = super::build_dataset(&args.dataset)?;
    let (structure, labels) = dataset.get_signed(args.index)?;

    output::print_header(&format!(
        "[{}] {} ({})",
        args.index,
        structure.name,
        structure.formula()
    ));
    print_structure(structure, labels);
    Ok(())
}

fn print_structure(structure: &Structure, labels: &SinglePointLabels) {
    let (a, b, c, alpha, beta, gamma) = structure.lattice.parameters();
    output::print_info(&format!(
        "a={:.4} b={:.4} c={:.4} Å  alpha={:.2} beta={:.2} gamma={:.2}°  V={:.4} Å³",
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        structure.lattice.volume().abs()
    ));
    output::print_info(&format!(
        "Energy: {:.6} eV ({:.6} eV/atom)",
        labels.energy,
        labels.energy_per_atom().unwrap_or_default()
    ));

    let s = labels.stress;
    output::print_info(&format!(
        "Stress (xx yy zz yz xz xy): {:.4} {:.4} {:.4} {:.4} {:.4} {:.4}",
        s[0], s[1], s[2], s[3], s[4], s[5]
    ));

    let rows: Vec<AtomRow> = structure
        .chemical_symbols()
        .into_iter()
        .zip(structure.positions())
        .zip(&labels.forces)
        .enumerate()
        .map(|(i, ((element, pos), f))| AtomRow {
            index: i,
            element,
            x: format!("{:.6}", pos[0]),
            y: format!("{:.6}", pos[1]),
            z: format!("{:.6}", pos[2]),
            fx: format!("{:.6}", f[0]),
            fy: format!("{:.6}", f[1]),
            fz: format!("{:.6}", f[2]),
        })
        .collect();

    println!("{}", Table::new(rows));
}
