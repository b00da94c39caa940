//! AI job-trends preset: typed fields per job, the ordinal education axis,
//! per-education aggregation and seeded stratified sampling.
//!
//! Parsing the source CSV is left to the host; this module starts from
//! already-typed fields.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::api::ParallelEngineConfig;
use crate::core::{CategoricalAxis, Dataset, Record, RecordId, Viewport};

pub const JOB_OPEN_2024_DIMENSION: &str = "JobOpen2024";
pub const JOB_OPEN_2030_DIMENSION: &str = "JobOpen2030";
pub const JOB_CHANGE_DIMENSION: &str = "JobChange";
pub const EXPERIENCE_DIMENSION: &str = "Experience";
pub const AUTOMATION_DIMENSION: &str = "Automation";
pub const SALARY_DIMENSION: &str = "Salary";
pub const EDUCATION_DIMENSION: &str = "RequiredEducationVal";
pub const EDUCATION_AXIS_TITLE: &str = "Required Education";

/// Display order of the job-trends view.
pub const DEFAULT_DIMENSIONS: [&str; 7] = [
    JOB_OPEN_2024_DIMENSION,
    JOB_OPEN_2030_DIMENSION,
    JOB_CHANGE_DIMENSION,
    EXPERIENCE_DIMENSION,
    AUTOMATION_DIMENSION,
    SALARY_DIMENSION,
    EDUCATION_DIMENSION,
];

/// Ordinal education scale; the discriminant is the axis index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    AssociateDegree,
    BachelorsDegree,
    MastersDegree,
    Phd,
}

impl EducationLevel {
    pub const ALL: [Self; 5] = [
        Self::HighSchool,
        Self::AssociateDegree,
        Self::BachelorsDegree,
        Self::MastersDegree,
        Self::Phd,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::AssociateDegree => "Associate Degree",
            Self::BachelorsDegree => "Bachelor\u{2019}s Degree",
            Self::MastersDegree => "Master\u{2019}s Degree",
            Self::Phd => "PhD",
        }
    }

    /// Matches a display label; a plain apostrophe is accepted as well.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().replace('\'', "\u{2019}");
        Self::ALL
            .into_iter()
            .find(|level| level.label() == normalized)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical axis for [`EDUCATION_DIMENSION`].
#[must_use]
pub fn education_axis() -> CategoricalAxis {
    CategoricalAxis {
        indices: EducationLevel::ALL
            .iter()
            .map(|level| level.index() as f64)
            .collect(),
        labels: EducationLevel::ALL
            .iter()
            .map(|level| level.label().to_owned())
            .collect(),
        title: EDUCATION_AXIS_TITLE.to_owned(),
    }
}

/// Engine configuration of the job-trends view: education axis, color by
/// job change.
#[must_use]
pub fn job_trends_config(viewport: Viewport) -> ParallelEngineConfig {
    ParallelEngineConfig::new(viewport)
        .with_color_dimension(JOB_CHANGE_DIMENSION)
        .with_categorical(EDUCATION_DIMENSION, education_axis())
        .with_legend_title("Job Change")
}

/// Typed fields of one job row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTrendFields {
    pub openings_2024: f64,
    pub openings_2030: f64,
    pub experience_years: f64,
    pub automation_risk_pct: f64,
    pub median_salary_usd: f64,
    /// `None` when the source label is not on the education scale.
    pub education: Option<EducationLevel>,
}

impl JobTrendFields {
    #[must_use]
    pub fn job_change(&self) -> f64 {
        self.openings_2030 - self.openings_2024
    }

    /// Builds the engine record; an unknown education level leaves the
    /// education value missing.
    #[must_use]
    pub fn to_record(&self, id: impl Into<RecordId>) -> Record {
        let job_change = self.job_change();
        let record = Record::new(id, job_change)
            .with_value(JOB_OPEN_2024_DIMENSION, self.openings_2024)
            .with_value(JOB_OPEN_2030_DIMENSION, self.openings_2030)
            .with_value(JOB_CHANGE_DIMENSION, job_change)
            .with_value(EXPERIENCE_DIMENSION, self.experience_years)
            .with_value(AUTOMATION_DIMENSION, self.automation_risk_pct)
            .with_value(SALARY_DIMENSION, self.median_salary_usd);
        match self.education {
            Some(level) => record.with_value(EDUCATION_DIMENSION, level.index() as f64),
            None => record,
        }
    }
}

/// Per-education summary row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EducationAggregate {
    pub level: EducationLevel,
    pub openings_2024: f64,
    pub openings_2030: f64,
    pub job_change: f64,
    pub experience_years: f64,
    pub automation_risk_pct: f64,
    pub median_salary_usd: f64,
    pub rows: usize,
}

impl EducationAggregate {
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new(self.level.label(), self.job_change)
            .with_value(JOB_OPEN_2024_DIMENSION, self.openings_2024)
            .with_value(JOB_OPEN_2030_DIMENSION, self.openings_2030)
            .with_value(JOB_CHANGE_DIMENSION, self.job_change)
            .with_value(EXPERIENCE_DIMENSION, self.experience_years)
            .with_value(AUTOMATION_DIMENSION, self.automation_risk_pct)
            .with_value(SALARY_DIMENSION, self.median_salary_usd)
            .with_value(EDUCATION_DIMENSION, self.level.index() as f64)
    }
}

/// One row per education level: openings and job change summed, experience,
/// automation and salary averaged. Levels without rows report zeros.
#[must_use]
pub fn aggregate_by_education(rows: &[JobTrendFields]) -> Vec<EducationAggregate> {
    EducationLevel::ALL
        .into_iter()
        .map(|level| {
            let group: Vec<&JobTrendFields> = rows
                .iter()
                .filter(|row| row.education == Some(level))
                .collect();
            let sum = |field: fn(&JobTrendFields) -> f64| -> f64 {
                group.iter().map(|row| field(row)).sum()
            };
            let mean = |field: fn(&JobTrendFields) -> f64| {
                if group.is_empty() {
                    0.0
                } else {
                    sum(field) / group.len() as f64
                }
            };
            EducationAggregate {
                level,
                openings_2024: sum(|row| row.openings_2024),
                openings_2030: sum(|row| row.openings_2030),
                job_change: sum(JobTrendFields::job_change),
                experience_years: mean(|row| row.experience_years),
                automation_risk_pct: mean(|row| row.automation_risk_pct),
                median_salary_usd: mean(|row| row.median_salary_usd),
                rows: group.len(),
            }
        })
        .collect()
}

/// Draws `per_group` records per education level.
///
/// Each group is shuffled with `rng`; groups smaller than `per_group` are
/// cycled. Ids are `"{level index}-{i}"`. Rows without a level and empty
/// groups contribute nothing.
pub fn stratified_sample<R: Rng + ?Sized>(
    rows: &[JobTrendFields],
    per_group: usize,
    rng: &mut R,
) -> Dataset {
    let mut records = Vec::with_capacity(per_group * EducationLevel::ALL.len());
    for level in EducationLevel::ALL {
        let mut pool: Vec<&JobTrendFields> = rows
            .iter()
            .filter(|row| row.education == Some(level))
            .collect();
        if pool.is_empty() {
            continue;
        }
        pool.shuffle(rng);
        records.extend((0..per_group).map(|i| {
            pool[i % pool.len()].to_record(format!("{}-{i}", level.index()))
        }));
    }
    Dataset::new(records)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{
        EDUCATION_DIMENSION, EducationLevel, JOB_CHANGE_DIMENSION, JobTrendFields,
        aggregate_by_education, education_axis, stratified_sample,
    };

    fn row(
        openings_2024: f64,
        openings_2030: f64,
        level: Option<EducationLevel>,
    ) -> JobTrendFields {
        JobTrendFields {
            openings_2024,
            openings_2030,
            experience_years: 4.0,
            automation_risk_pct: 50.0,
            median_salary_usd: 90_000.0,
            education: level,
        }
    }

    #[test]
    fn labels_round_trip_through_index_and_text() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_index(level.index()), Some(level));
            assert_eq!(EducationLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(
            EducationLevel::from_label("Master's Degree"),
            Some(EducationLevel::MastersDegree)
        );
        assert_eq!(EducationLevel::from_label("Bootcamp"), None);
    }

    #[test]
    fn education_axis_lists_five_levels() {
        let axis = education_axis();
        assert_eq!(axis.indices, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(axis.labels[4], "PhD");
        assert_eq!(axis.title, "Required Education");
    }

    #[test]
    fn record_derives_job_change() {
        let record = row(100.0, 160.0, Some(EducationLevel::Phd)).to_record("r");
        assert_eq!(record.value(JOB_CHANGE_DIMENSION), Some(60.0));
        assert_eq!(record.color_value(), 60.0);
        assert_eq!(record.value(EDUCATION_DIMENSION), Some(4.0));

        let unknown = row(1.0, 2.0, None).to_record("u");
        assert_eq!(unknown.value(EDUCATION_DIMENSION), None);
    }

    #[test]
    fn sample_ids_follow_level_and_position() {
        let rows = vec![
            row(1.0, 2.0, Some(EducationLevel::HighSchool)),
            row(3.0, 4.0, Some(EducationLevel::HighSchool)),
            row(5.0, 9.0, Some(EducationLevel::Phd)),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let sample = stratified_sample(&rows, 3, &mut rng);

        let ids: Vec<&str> = sample.records().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["0-0", "0-1", "0-2", "4-0", "4-1", "4-2"]);
        assert!(
            sample.records()[3..]
                .iter()
                .all(|record| record.value(JOB_CHANGE_DIMENSION) == Some(4.0))
        );
    }

    #[test]
    fn aggregate_sums_and_means_per_level() {
        let rows = vec![
            row(10.0, 15.0, Some(EducationLevel::BachelorsDegree)),
            row(20.0, 5.0, Some(EducationLevel::BachelorsDegree)),
        ];
        let aggregates = aggregate_by_education(&rows);
        let bachelors = aggregates[EducationLevel::BachelorsDegree.index()];

        assert_eq!(bachelors.openings_2024, 30.0);
        assert_eq!(bachelors.openings_2030, 20.0);
        assert_eq!(bachelors.job_change, -10.0);
        assert_eq!(bachelors.median_salary_usd, 90_000.0);
        assert_eq!(bachelors.rows, 2);

        let phd = aggregates[EducationLevel::Phd.index()];
        assert_eq!((phd.openings_2024, phd.experience_years, phd.rows), (0.0, 0.0, 0));
    }
}
