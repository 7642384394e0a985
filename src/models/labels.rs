//! # 单点计算标签
//!
//! 存储与一个结构对应的单次 DFT 计算结果：能量、原子力、应力。
//!
//! ## Voigt 约定
//! 3x3 应力张量按 (xx, yy, zz, yz, xz, xy) 顺序压缩为 6 分量，
//! 非对角分量取 `(S[i][j] + S[j][i]) / 2`，与 ASE `full_3x3_to_voigt_6_stress` 逐位一致。
//!
//! ## 依赖关系
//! - 被 `dataset/convert.rs` 构造
//! - 被 `formats/` 和 `commands/` 读取

use serde::{Deserialize, Serialize};

/// Voigt 分量顺序对应的 (行, 列) 下标
pub const VOIGT_INDICES: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// 单点计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePointLabels {
    /// 总能量 (eV)
    pub energy: f64,

    /// 原子力 (eV/Å)，形状 N x 3
    pub forces: Vec<[f64; 3]>,

    /// Voigt 应力 (xx, yy, zz, yz, xz, xy)
    pub stress: [f64; 6],
}

impl SinglePointLabels {
    /// 每原子能量
    pub fn energy_per_atom(&self) -> Option<f64> {
        match self.forces.len() {
            0 => None,
            n => Some(self.energy / n as f64),
        }
    }

    /// 最大原子力模长
    pub fn max_force(&self) -> f64 {
        self.forces
            .iter()
            .map(|f| (f[0] * f[0] + f[1] * f[1] + f[2] * f[2]).sqrt())
            .fold(0.0, f64::max)
    }

    /// 还原完整 3x3 应力张量
    pub fn stress_tensor(&self) -> [[f64; 3]; 3] {
        voigt6_to_full(&self.stress)
    }
}

/// 3x3 张量 -> Voigt 6 分量（非对角元素对取平均，不校验对称性）
pub fn voigt6(tensor: &[[f64; 3]; 3]) -> [f64; 6] {
    VOIGT_INDICES.map(|(i, j)| {
        if i == j {
            tensor[i][i]
        } else {
            (tensor[i][j] + tensor[j][i]) / 2.0
        }
    })
}

/// 带对称性校验的 Voigt 压缩
///
/// 任一非对角元素对的差超过 `tolerance` 时返回 `Err`，内容为出错的 (行, 列)。
pub fn voigt6_checked(tensor: &[[f64; 3]; 3], tolerance: f64) -> Result<[f64; 6], (usize, usize)> {
    for &(i, j) in &VOIGT_INDICES[3..] {
        if (tensor[i][j] - tensor[j][i]).abs() > tolerance {
            return Err((i, j));
        }
    }
    Ok(voigt6(tensor))
}

/// Voigt 6 分量 -> 对称 3x3 张量
pub fn voigt6_to_full(voigt: &[f64; 6]) -> [[f64; 3]; 3] {
    let mut tensor = [[0.0; 3]; 3];
    for (k, &(i, j)) in VOIGT_INDICES.iter().enumerate() {
        tensor[i][j] = voigt[k];
        tensor[j][i] = voigt[k];
    }
    tensor
}
