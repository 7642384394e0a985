//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config/`, `source/`, `dataset/`, `formats/`, `utils/`
//! - 子模块: load, show, export, config

pub mod config;
pub mod export;
pub mod load;
pub mod show;

use crate::cli::dataset::DatasetArgs;
use crate::cli::Commands;
use crate::config::{
    self as dataset_config, DatasetConfig, MpTrajDatasetConfig, DEFAULT_MIN_NUM_ATOMS,
};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::source::JsonlSource;
use crate::utils::{output, progress};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Load(args) => load::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Config(args) => config::execute(args),
    }
}

/// 由命令行参数得到数据集配置（配置文件优先）
pub fn resolve_config(args: &DatasetArgs) -> Result<DatasetConfig> {
    if let Some(ref path) = args.config {
        return dataset_config::load_config_file(path);
    }

    let min_num_atoms = if args.no_min_num_atoms {
        None
    } else {
        Some(args.min_num_atoms.unwrap_or(DEFAULT_MIN_NUM_ATOMS))
    };

    let mut config = MpTrajDatasetConfig::new(
        args.split,
        min_num_atoms,
        args.max_num_atoms,
        args.elements.clone(),
    )?;
    if let Some(tol) = args.stress_symmetry_tolerance {
        config = config.with_stress_symmetry_tolerance(tol)?;
    }
    Ok(config.into())
}

/// 解析配置并从本地缓存构建数据集
pub fn build_dataset(args: &DatasetArgs) -> Result<Dataset> {
    let config = resolve_config(args)?;
    let source = JsonlSource::new(&args.cache_dir);

    output::print_info(&format!(
        "Loading '{}' dataset from '{}'",
        config.type_tag(),
        source.root().display()
    ));

    let mut pb = progress::create_progress_bar(0, "Loading dataset...");
    config.create_dataset(&source, &mut pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::Split;
    use crate::error::MpTrajError;
    use crate::source::MPTRAJ_SOURCE_NAME;
    use clap::Parser;
    use std::fs;

    fn dataset_args(argv: &[&str]) -> DatasetArgs {
        let mut full = vec!["mptraj", "config"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Config(args) => args.dataset,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&dataset_args(&[])).unwrap();
        assert_eq!(config, DatasetConfig::MpTraj(MpTrajDatasetConfig::default()));
    }

    #[test]
    fn test_resolve_config_from_flags() {
        let args = dataset_args(&[
            "--split",
            "val",
            "--no-min-num-atoms",
            "--max-num-atoms",
            "12",
            "--elements",
            "Li,Na,Li",
        ]);
        let DatasetConfig::MpTraj(config) = resolve_config(&args).unwrap();

        assert_eq!(config.split(), Split::Val);
        assert_eq!(config.min_num_atoms(), None);
        assert_eq!(config.max_num_atoms(), Some(12));
        assert_eq!(config.elements().unwrap().len(), 2);
        assert_eq!(config.stress_symmetry_tolerance(), None);
    }

    #[test]
    fn test_resolve_config_with_symmetry_tolerance() {
        let args = dataset_args(&["--stress-symmetry-tolerance", "0.001"]);
        let DatasetConfig::MpTraj(config) = resolve_config(&args).unwrap();
        assert_eq!(config.stress_symmetry_tolerance(), Some(0.001));
        assert_eq!(config.min_num_atoms(), Some(5));
    }

    #[test]
    fn test_resolve_config_rejects_inverted_bounds() {
        let args = dataset_args(&["--min-num-atoms", "10", "--max-num-atoms", "3"]);
        assert!(matches!(
            resolve_config(&args),
            Err(MpTrajError::ConfigValidation(_))
        ));
    }

    #[test]
    fn test_config_file_conflicts_with_flags() {
        let result = Cli::try_parse_from([
            "mptraj",
            "load",
            "--config",
            "cfg.json",
            "--max-num-atoms",
            "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_dataset_from_cache_dir() {
        let cache = tempfile::tempdir().unwrap();
        let dir = cache.path().join(MPTRAJ_SOURCE_NAME);
        fs::create_dir_all(&dir).unwrap();

        let line = |mp_id: &str, n: usize| {
            let rows = vec!["[0, 0, 0]"; n].join(", ");
            let numbers = vec!["3"; n].join(", ");
            format!(
                r#"{{"mp_id": "{}", "positions": [{}], "numbers": [{}], "cell": [[3, 0, 0], [0, 3, 0], [0, 0, 3]], "corrected_total_energy": -1.5, "forces": [{}], "stress": [[0, 0, 0], [0, 0, 0], [0, 0, 0]]}}"#,
                mp_id, rows, numbers, rows
            )
        };
        fs::write(
            dir.join("val.jsonl"),
            format!("{}\n{}\n", line("mp-small", 2), line("mp-big", 6)),
        )
        .unwrap();

        let cache_dir = cache.path().display().to_string();
        let args = dataset_args(&["--split", "val", "--cache-dir", &cache_dir]);
        let dataset = build_dataset(&args).unwrap();

        assert_eq!(dataset.len(), 1);
        let (structure, _) = dataset.get(0).unwrap();
        assert_eq!(structure.name, "mp-big");
        assert_eq!(dataset.report().total, 2);
    }
}
