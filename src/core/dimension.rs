use serde::{Deserialize, Serialize};

use crate::core::record::{Dataset, extent_of};
use crate::core::scale::LinearScale;
use crate::error::{ParcoordError, ParcoordResult};

/// Domain used when no record carries a value for a dimension.
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Ordinal axis description: discrete index values and their display labels.
///
/// `indices[i]` is rendered with `labels[i]`; the axis title replaces the
/// dimension name in the overlay label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalAxis {
    pub indices: Vec<f64>,
    pub labels: Vec<String>,
    pub title: String,
}

impl CategoricalAxis {
    pub fn new(
        indices: Vec<f64>,
        labels: Vec<String>,
        title: impl Into<String>,
    ) -> ParcoordResult<Self> {
        if indices.len() != labels.len() {
            return Err(ParcoordError::InvalidData(format!(
                "categorical axis has {} indices but {} labels",
                indices.len(),
                labels.len()
            )));
        }
        if indices.iter().any(|index| !index.is_finite()) {
            return Err(ParcoordError::InvalidData(
                "categorical indices must be finite".to_owned(),
            ));
        }
        Ok(Self {
            indices,
            labels,
            title: title.into(),
        })
    }

    /// Builds an axis whose indices are `0..labels.len()`.
    pub fn from_labels<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        title: impl Into<String>,
    ) -> ParcoordResult<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let indices = (0..labels.len()).map(|index| index as f64).collect();
        Self::new(indices, labels, title)
    }

    #[must_use]
    pub fn label_for(&self, index: f64) -> Option<&str> {
        self.indices
            .iter()
            .position(|candidate| *candidate == index)
            .and_then(|position| self.labels.get(position))
            .map(String::as_str)
    }

    #[must_use]
    pub fn index_extent(&self) -> Option<(f64, f64)> {
        extent_of(self.indices.iter().copied())
    }
}

/// One vertical axis: its name, niced scale and optional categorical metadata.
///
/// The display position is not stored here; it is the index of the dimension
/// in the engine's authoritative order list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    name: String,
    scale: LinearScale,
    categorical: Option<CategoricalAxis>,
}

impl Dimension {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        scale: LinearScale,
        categorical: Option<CategoricalAxis>,
    ) -> Self {
        Self {
            name: name.into(),
            scale,
            categorical,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    pub(crate) fn set_scale(&mut self, scale: LinearScale) {
        self.scale = scale;
    }

    #[must_use]
    pub fn categorical(&self) -> Option<&CategoricalAxis> {
        self.categorical.as_ref()
    }

    /// Overlay label: categorical title when present, otherwise the name.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.categorical
            .as_ref()
            .map_or(self.name.as_str(), |axis| axis.title.as_str())
    }
}

/// Resolves the raw (un-niced) domain of one dimension.
///
/// Empty data yields [`DEFAULT_DOMAIN`]. A categorical dimension over
/// non-empty data is widened to include every categorical index.
#[must_use]
pub fn resolve_dimension_domain(
    dataset: &Dataset,
    name: &str,
    categorical: Option<&CategoricalAxis>,
) -> (f64, f64) {
    if dataset.is_empty() {
        return DEFAULT_DOMAIN;
    }

    let data_extent = dataset.extent(name);
    let index_extent = categorical.and_then(CategoricalAxis::index_extent);
    match (data_extent, index_extent) {
        (Some((min, max)), Some((index_min, index_max))) => {
            (min.min(index_min), max.max(index_max))
        }
        (Some(extent), None) | (None, Some(extent)) => extent,
        (None, None) => DEFAULT_DOMAIN,
    }
}

/// Computes the niced vertical scale of one dimension.
pub fn compute_dimension_scale(
    dataset: &Dataset,
    name: &str,
    categorical: Option<&CategoricalAxis>,
    plot_height: f64,
) -> ParcoordResult<LinearScale> {
    let domain = resolve_dimension_domain(dataset, name, categorical);
    Ok(LinearScale::vertical(domain, plot_height)?.nice())
}

#[cfg(test)]
mod tests {
    use super::{
        CategoricalAxis, DEFAULT_DOMAIN, compute_dimension_scale, resolve_dimension_domain,
    };
    use crate::core::{Dataset, Record};

    #[test]
    fn empty_dataset_uses_default_domain() {
        let dataset = Dataset::default();
        let axis = CategoricalAxis::from_labels(["a", "b", "c"], "Letters").expect("axis");
        assert_eq!(resolve_dimension_domain(&dataset, "A", None), DEFAULT_DOMAIN);
        assert_eq!(
            resolve_dimension_domain(&dataset, "A", Some(&axis)),
            DEFAULT_DOMAIN
        );
    }

    #[test]
    fn categorical_domain_covers_all_indices() {
        let dataset = Dataset::new(vec![
            Record::new(0usize, 0.0).with_value("Edu", 1.0),
            Record::new(1usize, 0.0).with_value("Edu", 2.0),
        ]);
        let axis = CategoricalAxis::from_labels(["hs", "assoc", "ba", "ma", "phd"], "Education")
            .expect("axis");
        assert_eq!(
            resolve_dimension_domain(&dataset, "Edu", Some(&axis)),
            (0.0, 4.0)
        );
    }

    #[test]
    fn scale_is_niced_and_inverted() {
        let dataset = Dataset::new(vec![
            Record::new(0usize, 0.0).with_value("A", 0.12),
            Record::new(1usize, 0.0).with_value("A", 9.87),
        ]);
        let scale = compute_dimension_scale(&dataset, "A", None, 100.0).expect("scale");
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert_eq!(scale.range(), (100.0, 0.0));
    }

    #[test]
    fn mismatched_categorical_metadata_is_rejected() {
        let err = CategoricalAxis::new(vec![0.0, 1.0], vec!["only".to_owned()], "t");
        assert!(err.is_err());
    }

    #[test]
    fn categorical_label_lookup_uses_index_value() {
        let axis = CategoricalAxis::from_labels(["low", "high"], "Level").expect("axis");
        assert_eq!(axis.label_for(1.0), Some("high"));
        assert_eq!(axis.label_for(0.5), None);
    }
}
