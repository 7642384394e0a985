//! # 原始记录转换
//!
//! 将 MPtrj 原始记录转换为结构 + 单点标签。
//!
//! ## 转换规则
//! - `positions` (N x 3), `numbers` (N), `cell` (3 x 3) -> `Structure`，`pbc` 恒为 true
//! - `corrected_total_energy` -> 能量（必须是单个数值）
//! - `forces` -> 原子力（必须是 N x 3）
//! - `stress` (3 x 3) -> Voigt 6 分量
//!
//! 任何字段缺失或形状不符都返回 `RecordConversion`，附带记录在流中的位置。
//!
//! ## 依赖关系
//! - 被 `dataset/builder.rs` 调用
//! - 使用 `models/`

use super::LabeledStructure;
use crate::error::{MpTrajError, Result};
use crate::models::labels::{voigt6, voigt6_checked};
use crate::models::{Lattice, SinglePointLabels, Structure};
use crate::source::RawRecord;

/// 转换一条原始记录
///
/// `stress_tolerance` 为 `Some` 时校验应力张量对称性。
pub fn convert_record(
    record: &RawRecord,
    index: usize,
    stress_tolerance: Option<f64>,
) -> Result<LabeledStructure> {
    let fail = |reason: String| MpTrajError::RecordConversion { index, reason };

    let positions = rows3(required(&record.positions, "positions", index)?, "positions")
        .map_err(fail)?;
    let numbers = atomic_numbers(required(&record.numbers, "numbers", index)?).map_err(fail)?;
    let cell = matrix3(required(&record.cell, "cell", index)?, "cell").map_err(fail)?;

    let name = record
        .mp_id
        .clone()
        .unwrap_or_else(|| format!("mptraj-{}", index));

    let structure = Structure::new(name, Lattice::from_vectors(cell), numbers, positions, true)
        .map_err(|e| match e {
            MpTrajError::InvalidStructure(reason) => fail(reason),
            other => other,
        })?;

    let energy = required(
        &record.corrected_total_energy,
        "corrected_total_energy",
        index,
    )?
    .item()
    .ok_or_else(|| fail("corrected_total_energy is not a single number".to_string()))?;

    let forces = rows3(required(&record.forces, "forces", index)?, "forces").map_err(fail)?;
    if forces.len() != structure.num_atoms() {
        return Err(fail(format!(
            "forces has {} rows but structure has {} atoms",
            forces.len(),
            structure.num_atoms()
        )));
    }

    let stress_tensor = matrix3(required(&record.stress, "stress", index)?, "stress").map_err(fail)?;
    let stress = match stress_tolerance {
        Some(tol) => voigt6_checked(&stress_tensor, tol).map_err(|(i, j)| {
            fail(format!(
                "stress tensor is not symmetric: [{}][{}]={} vs [{}][{}]={}",
                i, j, stress_tensor[i][j], j, i, stress_tensor[j][i]
            ))
        })?,
        None => voigt6(&stress_tensor),
    };

    Ok(LabeledStructure {
        structure,
        labels: SinglePointLabels {
            energy,
            forces,
            stress,
        },
    })
}

fn required<'a, T>(field: &'a Option<T>, name: &str, index: usize) -> Result<&'a T> {
    field.as_ref().ok_or_else(|| MpTrajError::RecordConversion {
        index,
        reason: format!("missing field '{}'", name),
    })
}

/// N x 3 矩阵
fn rows3(rows: &[Vec<f64>], name: &str) -> std::result::Result<Vec<[f64; 3]>, String> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(format!(
                "{} row {} has {} components, expected 3",
                name,
                i,
                row.len()
            )),
        })
        .collect()
}

/// 3 x 3 矩阵
fn matrix3(rows: &[Vec<f64>], name: &str) -> std::result::Result<[[f64; 3]; 3], String> {
    match rows3(rows, name)?.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        other => Err(format!("{} has {} rows, expected 3", name, other.len())),
    }
}

fn atomic_numbers(numbers: &[i64]) -> std::result::Result<Vec<u8>, String> {
    numbers
        .iter()
        .map(|&z| u8::try_from(z).map_err(|_| format!("invalid atomic number {}", z)))
        .collect()
}
