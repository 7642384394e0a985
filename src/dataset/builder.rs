//! # 数据集构建器
//!
//! 同步执行 加载 -> 转换 -> 过滤 -> 物化 流水线。
//!
//! ## 功能
//! - 从数据源加载配置指定的划分
//! - 逐条转换记录，任何一条失败即中止整个构建
//! - 按配置的谓词过滤，被过滤的结构静默丢弃（只计入统计）
//! - 通过 `ProgressSink` 汇报进度
//!
//! ## 依赖关系
//! - 被 `config/` 调用
//! - 使用 `source/`, `dataset/convert.rs`, `dataset/filter.rs`
//! - 使用 `utils/progress.rs`

use super::convert::convert_record;
use super::filter::{first_rejection, predicates_from_config, DropReason};
use super::{Dataset, LabeledStructure};
use crate::config::MpTrajDatasetConfig;
use crate::error::Result;
use crate::source::{RawRecord, StructureSource, MPTRAJ_SOURCE_NAME};
use crate::utils::progress::ProgressSink;

/// 构建统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// 上游记录总数
    pub total: usize,
    /// 保留数量
    pub retained: usize,
    /// 原子数过少而丢弃
    pub too_few_atoms: usize,
    /// 原子数过多而丢弃
    pub too_many_atoms: usize,
    /// 含不允许元素而丢弃
    pub disallowed_elements: usize,
}

impl BuildReport {
    fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::TooFewAtoms => self.too_few_atoms += 1,
            DropReason::TooManyAtoms => self.too_many_atoms += 1,
            DropReason::DisallowedElements => self.disallowed_elements += 1,
        }
    }

    /// 丢弃总数
    pub fn dropped(&self) -> usize {
        self.too_few_atoms + self.too_many_atoms + self.disallowed_elements
    }
}

/// 数据集构建器
pub struct DatasetBuilder<'a, S: StructureSource + ?Sized> {
    config: &'a MpTrajDatasetConfig,
    source: &'a S,
}

impl<'a, S: StructureSource + ?Sized> DatasetBuilder<'a, S> {
    pub fn new(config: &'a MpTrajDatasetConfig, source: &'a S) -> Self {
        Self { config, source }
    }

    /// 执行完整流水线
    pub fn build(&self, progress: &mut dyn ProgressSink) -> Result<Dataset> {
        let records = self
            .source
            .load_split(MPTRAJ_SOURCE_NAME, self.config.split())?;

        log::info!(
            "Loaded {} records from '{}' split '{}'",
            records.len(),
            MPTRAJ_SOURCE_NAME,
            self.config.split()
        );

        progress.start(records.len() as u64);
        let result = self.process(&records, progress);
        progress.close();

        let (entries, report) = result?;
        log::info!(
            "Retained {} of {} structures ({} dropped)",
            report.retained,
            report.total,
            report.dropped()
        );

        Ok(Dataset::new(entries, report))
    }

    fn process(
        &self,
        records: &[RawRecord],
        progress: &mut dyn ProgressSink,
    ) -> Result<(Vec<LabeledStructure>, BuildReport)> {
        let predicates = predicates_from_config(self.config);
        let tolerance = self.config.stress_symmetry_tolerance();

        let mut entries = Vec::new();
        let mut report = BuildReport {
            total: records.len(),
            ..Default::default()
        };

        for (index, record) in records.iter().enumerate() {
            let item = convert_record(record, index, tolerance)?;

            match first_rejection(&predicates, &item.structure) {
                None => entries.push(item),
                Some(reason) => {
                    log::debug!(
                        "Dropping record #{} ({}): {}",
                        index,
                        item.structure.name,
                        reason
                    );
                    report.record_drop(reason);
                }
            }

            progress.update(1);
        }

        report.retained = entries.len();
        Ok((entries, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Split;
    use crate::error::MpTrajError;
    use crate::source::memory::MemorySource;
    use crate::source::NumericValue;
    use crate::utils::progress::testing::RecordingProgress;

    fn record(mp_id: &str, numbers: &[i64]) -> RawRecord {
        let n = numbers.len();
        RawRecord {
            mp_id: Some(mp_id.to_string()),
            positions: Some((0..n).map(|i| vec![0.5 * i as f64, 0.0, 0.0]).collect()),
            numbers: Some(numbers.to_vec()),
            cell: Some(vec![
                vec![8.0, 0.0, 0.0],
                vec![0.0, 8.0, 0.0],
                vec![0.0, 0.0, 8.0],
            ]),
            corrected_total_energy: Some(NumericValue::Scalar(-2.0 * n as f64)),
            forces: Some(vec![vec![0.0, 0.0, 0.1]; n]),
            stress: Some(vec![
                vec![1.0, 6.0, 5.0],
                vec![6.0, 2.0, 4.0],
                vec![5.0, 4.0, 3.0],
            ]),
        }
    }

    fn names(dataset: &Dataset) -> Vec<String> {
        dataset.iter().map(|e| e.structure.name.clone()).collect()
    }

    fn three_records() -> Vec<RawRecord> {
        vec![
            record("a", &[3; 3]),
            record("b", &[3; 5]),
            record("c", &[3; 10]),
        ]
    }

    #[test]
    fn test_default_min_num_atoms_scenario() {
        let source = MemorySource::new().with_split(Split::Train, three_records());
        let config = MpTrajDatasetConfig::default();
        let mut progress = RecordingProgress::default();

        let dataset = DatasetBuilder::new(&config, &source)
            .build(&mut progress)
            .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(names(&dataset), vec!["b", "c"]);
        assert_eq!(dataset.get(0).unwrap().0.num_atoms(), 5);
        assert_eq!(dataset.get(1).unwrap().0.num_atoms(), 10);

        assert_eq!(
            dataset.report(),
            &BuildReport {
                total: 3,
                retained: 2,
                too_few_atoms: 1,
                too_many_atoms: 0,
                disallowed_elements: 0,
            }
        );
    }

    #[test]
    fn test_progress_reports_every_record() {
        let source = MemorySource::new().with_split(Split::Train, three_records());
        let config = MpTrajDatasetConfig::default();
        let mut progress = RecordingProgress::default();

        DatasetBuilder::new(&config, &source)
            .build(&mut progress)
            .unwrap();

        assert_eq!(progress.total, Some(3));
        assert_eq!(progress.processed(), 3);
        assert!(progress.closed);
    }

    #[test]
    fn test_bounds_and_elements_hold_for_retained() {
        let records = vec![
            record("li2", &[3, 3]),
            record("li4o", &[3, 3, 3, 3, 8]),
            record("na3", &[11, 11, 11]),
            record("lina6", &[3, 11, 3, 11, 3, 11]),
            record("li9", &[3; 9]),
        ];
        let source = MemorySource::new().with_split(Split::Val, records.clone());
        let config = MpTrajDatasetConfig::new(
            Split::Val,
            Some(3),
            Some(8),
            Some(vec!["Li".into(), "Na".into()]),
        )
        .unwrap();

        let dataset = config
            .create_dataset(&source, &mut RecordingProgress::default())
            .unwrap();

        assert!(dataset.len() <= records.len());
        assert_eq!(names(&dataset), vec!["na3", "lina6"]);
        for entry in dataset.iter() {
            let n = entry.structure.num_atoms();
            assert!((3..=8).contains(&n));
            assert!(entry
                .structure
                .chemical_elements()
                .iter()
                .all(|el| *el == "Li" || *el == "Na"));
        }

        let report = dataset.report();
        assert_eq!(report.too_few_atoms, 1);
        assert_eq!(report.too_many_atoms, 1);
        assert_eq!(report.disallowed_elements, 1);
        assert_eq!(report.retained + report.dropped(), report.total);
    }

    #[test]
    fn test_malformed_record_aborts_build() {
        let mut bad = record("bad", &[3; 6]);
        bad.forces = Some(vec![vec![0.0; 3]; 5]);
        let records = vec![record("ok", &[3; 6]), bad, record("never", &[3; 6])];

        let source = MemorySource::new().with_split(Split::Train, records);
        let config = MpTrajDatasetConfig::default();
        let mut progress = RecordingProgress::default();

        let err = DatasetBuilder::new(&config, &source)
            .build(&mut progress)
            .unwrap_err();

        assert!(matches!(err, MpTrajError::RecordConversion { index: 1, .. }));
        // 失败时也会关闭进度
        assert!(progress.closed);
        assert_eq!(progress.processed(), 1);
    }

    #[test]
    fn test_source_errors_propagate() {
        let config = MpTrajDatasetConfig::default();

        let err = DatasetBuilder::new(&config, &MemorySource::offline())
            .build(&mut RecordingProgress::default())
            .unwrap_err();
        assert!(matches!(err, MpTrajError::SourceUnavailable { .. }));

        let source = MemorySource::new().with_split(Split::Val, three_records());
        let err = DatasetBuilder::new(&config, &source)
            .build(&mut RecordingProgress::default())
            .unwrap_err();
        assert!(matches!(err, MpTrajError::SplitNotFound { .. }));
    }

    #[test]
    fn test_build_is_repeatable() {
        let source = MemorySource::new().with_split(Split::Test, three_records());
        let config = MpTrajDatasetConfig::new(Split::Test, Some(1), None, None).unwrap();

        let first = config
            .create_dataset(&source, &mut RecordingProgress::default())
            .unwrap();
        let second = config
            .create_dataset(&source, &mut RecordingProgress::default())
            .unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first.len(), second.len());
        for i in 0..first.len() {
            assert_eq!(first.get(i).unwrap(), second.get(i).unwrap());
        }
    }
}
