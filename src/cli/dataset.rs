//! # 数据集选择参数
//!
//! 所有子命令共享的数据集配置与数据源参数。
//!
//! ## 依赖关系
//! - 被 `cli/` 其他子命令 flatten 使用
//! - 在 `commands/mod.rs` 中解析为 `DatasetConfig`

use crate::config::Split;
use clap::Args;
use std::path::PathBuf;

/// 数据集配置参数
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// JSON dataset config file (tagged with "type": "mptraj")
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "split",
            "min_num_atoms",
            "no_min_num_atoms",
            "max_num_atoms",
            "elements",
            "stress_symmetry_tolerance",
        ]
    )]
    pub config: Option<PathBuf>,

    /// Dataset split to load
    #[arg(long, value_enum, default_value_t = Split::Train)]
    pub split: Split,

    /// Drop structures with fewer atoms [default: 5]
    #[arg(long)]
    pub min_num_atoms: Option<usize>,

    /// Disable the minimum atom count filter
    #[arg(long, default_value_t = false, conflicts_with = "min_num_atoms")]
    pub no_min_num_atoms: bool,

    /// Drop structures with more atoms
    #[arg(long)]
    pub max_num_atoms: Option<usize>,

    /// Allowed elements, comma separated (e.g. 'Li,Na'); structures may use any subset
    #[arg(long, value_delimiter = ',')]
    pub elements: Option<Vec<String>>,

    /// Reject records whose stress tensor is asymmetric beyond this tolerance
    #[arg(long)]
    pub stress_symmetry_tolerance: Option<f64>,

    /// Local cache directory holding the downloaded splits
    #[arg(long, env = "MPTRAJ_CACHE_DIR", default_value = "data")]
    pub cache_dir: PathBuf,
}
