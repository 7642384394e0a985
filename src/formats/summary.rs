//! # 数据集摘要 CSV 导出
//!
//! 每个结构一行：名称、化学式、原子数、体积、能量、每原子能量、最大力。
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 使用
//! - 使用 `csv` 库写入 CSV 文件

use crate::dataset::Dataset;
use crate::error::{MpTrajError, Result};

use std::io::Write;
use std::path::Path;

const HEADER: [&str; 7] = [
    "name",
    "formula",
    "num_atoms",
    "volume",
    "energy",
    "energy_per_atom",
    "max_force",
];

/// 写入任意 writer
pub fn write_summary<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in dataset {
        let s = &entry.structure;
        let l = &entry.labels;
        wtr.write_record(&[
            s.name.clone(),
            s.formula(),
            s.num_atoms().to_string(),
            format!("{:.6}", s.lattice.volume().abs()),
            format!("{:.6}", l.energy),
            l.energy_per_atom()
                .map(|e| format!("{:.6}", e))
                .unwrap_or_default(),
            format!("{:.6}", l.max_force()),
        ])?;
    }

    wtr.flush().map_err(|e| MpTrajError::FileWriteError {
        path: "<summary>".to_string(),
        source: e,
    })?;
    Ok(())
}

/// 写入 CSV 文件
pub fn write_summary_csv(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| MpTrajError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_summary(dataset, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{BuildReport, LabeledStructure};
    use crate::models::{Lattice, SinglePointLabels, Structure};

    #[test]
    fn test_summary_rows() {
        let entry = LabeledStructure {
            structure: Structure::new(
                "mp-149",
                Lattice::from_vectors([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]),
                vec![14, 14],
                vec![[0.0; 3], [1.0, 1.0, 1.0]],
                true,
            )
            .unwrap(),
            labels: SinglePointLabels {
                energy: -10.0,
                forces: vec![[0.0, 0.0, 0.0], [0.0, 3.0, 4.0]],
                stress: [0.0; 6],
            },
        };
        let dataset = Dataset::new(vec![entry], BuildReport::default());

        let mut buf = Vec::new();
        write_summary(&dataset, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "name,formula,num_atoms,volume,energy,energy_per_atom,max_force"
        );
        assert_eq!(
            lines[1],
            "mp-149,Si2,2,8.000000,-10.000000,-5.000000,5.000000"
        );
    }
}
