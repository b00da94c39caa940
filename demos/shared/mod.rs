use parcoord_rs::core::Dataset;
use parcoord_rs::datasets::{EducationLevel, JobTrendFields, stratified_sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_PER_LEVEL: usize = 20;

/// Synthetic job rows shaped like the labour-market survey the view was
/// built for.
pub fn synthetic_job_rows(len: usize, seed: u64) -> Vec<JobTrendFields> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            let level = EducationLevel::from_index(i % EducationLevel::ALL.len());
            let tier = level.map_or(0.0, |level| level.index() as f64);
            let openings_2024 = rng.gen_range(1_000.0..10_000.0);
            JobTrendFields {
                openings_2024,
                openings_2030: openings_2024 * rng.gen_range(0.6..1.6),
                experience_years: rng.gen_range(0.0..20.0),
                automation_risk_pct: rng.gen_range(5.0..95.0) - tier * 6.0,
                median_salary_usd: 35_000.0 + tier * 18_000.0 + rng.gen_range(0.0..25_000.0),
                education: level,
            }
        })
        .collect()
}

pub fn sampled_dataset(seed: u64) -> Dataset {
    let rows = synthetic_job_rows(1_000, seed);
    stratified_sample(&rows, SAMPLE_PER_LEVEL, &mut StdRng::seed_from_u64(seed))
}
