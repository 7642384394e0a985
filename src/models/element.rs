//! # 元素周期表
//!
//! 原子序数与元素符号之间的双向映射（Z = 1..=118）。
//!
//! ## 依赖关系
//! - 被 `models/structure.rs` 用于化学元素集合计算
//! - 被 `config/` 用于校验元素符号
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 最大原子序数
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// 元素符号表，下标为 Z - 1
#[rustfmt::skip]
static SYMBOLS: [&str; MAX_ATOMIC_NUMBER as usize] = [
    "H", "He",
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe",
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf",
    "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf",
    "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// 元素符号 -> 原子序数
static NUMBERS_BY_SYMBOL: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, &sym)| (sym, i as u8 + 1))
        .collect()
});

/// 由原子序数获取元素符号
pub fn symbol(number: u8) -> Option<&'static str> {
    match number {
        1..=MAX_ATOMIC_NUMBER => Some(SYMBOLS[number as usize - 1]),
        _ => None,
    }
}

/// 由元素符号获取原子序数（区分大小写）
pub fn atomic_number(symbol: &str) -> Option<u8> {
    NUMBERS_BY_SYMBOL.get(symbol).copied()
}

/// 是否为合法元素符号
pub fn is_valid_symbol(symbol: &str) -> bool {
    atomic_number(symbol).is_some()
}
