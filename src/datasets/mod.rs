//! Ready-made dataset presets.

pub mod job_trends;

pub use job_trends::{
    DEFAULT_DIMENSIONS, EDUCATION_AXIS_TITLE, EDUCATION_DIMENSION, EducationAggregate,
    EducationLevel, JOB_CHANGE_DIMENSION, JobTrendFields, aggregate_by_education,
    education_axis, job_trends_config, stratified_sample,
};
