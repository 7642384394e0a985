//! # 扩展 XYZ 格式写出
//!
//! 将带标签的结构写成 ASE 兼容的 extended XYZ，常用于势函数训练。
//!
//! ## 格式说明
//! ```text
//! N
//! Lattice="ax ay az bx by bz cx cy cz" Properties=species:S:1:pos:R:3:forces:R:3 energy=E stress="s11 ... s33" pbc="T T T" name=...
//! Element x y z fx fy fz
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 使用
//! - 使用 `dataset/` 和 `models/`

use crate::dataset::{Dataset, LabeledStructure};
use crate::error::{MpTrajError, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 单个结构转为 extended XYZ 帧
pub fn to_extxyz_string(entry: &LabeledStructure) -> String {
    let structure = &entry.structure;
    let labels = &entry.labels;

    let lattice = structure
        .lattice
        .matrix
        .iter()
        .flatten()
        .map(|v| format!("{:.10}", v))
        .collect::<Vec<_>>()
        .join(" ");

    let stress = labels
        .stress_tensor()
        .iter()
        .flatten()
        .map(|v| format!("{:.10}", v))
        .collect::<Vec<_>>()
        .join(" ");

    let pbc = if structure.pbc { "T T T" } else { "F F F" };

    let mut result = String::new();
    result.push_str(&format!("{}\n", structure.num_atoms()));
    result.push_str(&format!(
        "Lattice=\"{}\" Properties=species:S:1:pos:R:3:forces:R:3 energy={:.10} stress=\"{}\" pbc=\"{}\" name={}\n",
        lattice,
        labels.energy,
        stress,
        pbc,
        structure.name.replace(char::is_whitespace, "_")
    ));

    for ((symbol, pos), force) in structure
        .chemical_symbols()
        .iter()
        .zip(structure.positions())
        .zip(&labels.forces)
    {
        result.push_str(&format!(
            "{:<2} {:16.10} {:16.10} {:16.10} {:16.10} {:16.10} {:16.10}\n",
            symbol, pos[0], pos[1], pos[2], force[0], force[1], force[2]
        ));
    }

    result
}

/// 写出整个数据集
pub fn write_extxyz(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| MpTrajError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    for entry in dataset {
        writer
            .write_all(to_extxyz_string(entry).as_bytes())
            .map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lattice, SinglePointLabels, Structure};

    fn lio() -> LabeledStructure {
        LabeledStructure {
            structure: Structure::new(
                "mp-1960",
                Lattice::from_vectors([[4.6, 0.0, 0.0], [0.0, 4.6, 0.0], [0.0, 0.0, 4.6]]),
                vec![3, 8],
                vec![[0.0, 0.0, 0.0], [1.15, 1.15, 1.15]],
                true,
            )
            .unwrap(),
            labels: SinglePointLabels {
                energy: -14.25,
                forces: vec![[0.01, 0.0, 0.0], [-0.01, 0.0, 0.0]],
                stress: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            },
        }
    }

    #[test]
    fn test_extxyz_frame_layout() {
        let frame = to_extxyz_string(&lio());
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert!(lines[1].contains("Properties=species:S:1:pos:R:3:forces:R:3"));
        assert!(lines[1].contains("energy=-14.2500000000"));
        assert!(lines[1].contains("pbc=\"T T T\""));
        assert!(lines[1].contains("name=mp-1960"));
        assert!(lines[2].starts_with("Li"));
        assert!(lines[3].starts_with("O "));

        let values: Vec<f64> = lines[3]
            .split_whitespace()
            .skip(1)
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 6);
        assert!((values[0] - 1.15).abs() < 1e-9);
        assert!((values[3] + 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_extxyz_stress_is_full_symmetric_tensor() {
        let frame = to_extxyz_string(&lio());
        let header = frame.lines().nth(1).unwrap();
        let start = header.find("stress=\"").unwrap() + "stress=\"".len();
        let end = start + header[start..].find('"').unwrap();

        let values: Vec<f64> = header[start..end]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values, vec![1.0, 6.0, 5.0, 6.0, 2.0, 4.0, 5.0, 4.0, 3.0]);
    }
}
