//! # 原子结构数据模型
//!
//! 定义训练集使用的周期性原子结构表示：晶格、原子序数、笛卡尔坐标、周期性标志。
//!
//! ## 依赖关系
//! - 被 `dataset/` 和 `formats/` 使用
//! - 使用 `models/element.rs` 将原子序数映射为元素符号

use crate::error::{MpTrajError, Result};
use crate::models::element;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 晶格表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)，角度单位：度
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = norm(a_vec);
        let b = norm(b_vec);
        let c = norm(c_vec);

        let alpha = (dot(b_vec, c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(a_vec, c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(a_vec, b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积（带符号的行列式）
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.matrix;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}

fn dot(u: [f64; 3], v: [f64; 3]) -> f64 {
    u.iter().zip(v.iter()).map(|(x, y)| x * y).sum()
}

fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

/// 周期性原子结构
///
/// 不变量：`numbers.len() == positions.len() >= 1`，所有原子序数都在周期表内。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    /// 结构名称（MPtrj 中的 mp_id，或按流位置生成）
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子序数
    numbers: Vec<u8>,

    /// 笛卡尔坐标 (Å)
    positions: Vec<[f64; 3]>,

    /// 三个方向上是否周期
    pub pbc: bool,
}

impl Structure {
    /// 创建结构并校验不变量
    pub fn new(
        name: impl Into<String>,
        lattice: Lattice,
        numbers: Vec<u8>,
        positions: Vec<[f64; 3]>,
        pbc: bool,
    ) -> Result<Self> {
        if numbers.is_empty() {
            return Err(MpTrajError::InvalidStructure(
                "structure has no atoms".to_string(),
            ));
        }
        if numbers.len() != positions.len() {
            return Err(MpTrajError::InvalidStructure(format!(
                "{} atomic numbers but {} positions",
                numbers.len(),
                positions.len()
            )));
        }
        if let Some(&z) = numbers.iter().find(|&&z| element::symbol(z).is_none()) {
            return Err(MpTrajError::InvalidStructure(format!(
                "invalid atomic number {}",
                z
            )));
        }

        Ok(Structure {
            name: name.into(),
            lattice,
            numbers,
            positions,
            pbc,
        })
    }

    /// 原子数
    pub fn num_atoms(&self) -> usize {
        self.numbers.len()
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// 每个原子的元素符号
    pub fn chemical_symbols(&self) -> Vec<&'static str> {
        self.numbers()
            .iter()
            .filter_map(|&z| element::symbol(z))
            .collect()
    }

    /// 结构中出现的不同化学元素
    pub fn chemical_elements(&self) -> BTreeSet<&'static str> {
        self.chemical_symbols().into_iter().collect()
    }

    /// 计算化学式（按元素符号字母序）
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for sym in self.chemical_symbols() {
            *counts.entry(sym).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
