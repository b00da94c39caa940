use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::dimension::Dimension;
use crate::core::record::{Dataset, Record};
use crate::core::slot_layout::SlotLayout;

/// Stable handle of a configured dimension.
///
/// Ids are assigned from the construction order and never change; the
/// display order is tracked separately as a list of ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(usize);

impl DimensionId {
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// One cached polyline vertex in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub dimension: DimensionId,
    pub x: f64,
    pub y: f64,
}

pub type ProjectedRow = SmallVec<[ProjectedPoint; 8]>;

/// Per-record polyline vertices, one row per record in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateCache {
    rows: Vec<ProjectedRow>,
}

impl CoordinateCache {
    #[must_use]
    pub fn rows(&self) -> &[ProjectedRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, record_index: usize) -> Option<&ProjectedRow> {
        self.rows.get(record_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cached vertex of `record_index` on `dimension`.
    #[must_use]
    pub fn point(&self, record_index: usize, dimension: DimensionId) -> Option<ProjectedPoint> {
        self.rows
            .get(record_index)?
            .iter()
            .find(|point| point.dimension == dimension)
            .copied()
    }

    /// Recomputes every row, reusing the outer allocation.
    pub fn rebuild(
        &mut self,
        dataset: &Dataset,
        dimensions: &[Dimension],
        order: &[DimensionId],
        layout: SlotLayout,
    ) {
        let slots: SmallVec<[(DimensionId, f64); 8]> = order
            .iter()
            .enumerate()
            .filter_map(|(slot, id)| layout.position(slot).map(|x| (*id, x)))
            .collect();

        self.rows.clear();
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            let rows: Vec<ProjectedRow> = dataset
                .records()
                .par_iter()
                .map(|record| project_record(record, dimensions, &slots))
                .collect();
            self.rows.extend(rows);
        }
        #[cfg(not(feature = "parallel-projection"))]
        {
            self.rows.extend(
                dataset
                    .records()
                    .iter()
                    .map(|record| project_record(record, dimensions, &slots)),
            );
        }
    }
}

fn project_record(
    record: &Record,
    dimensions: &[Dimension],
    slots: &[(DimensionId, f64)],
) -> ProjectedRow {
    slots
        .iter()
        .filter_map(|(id, x)| {
            let dimension = dimensions.get(id.raw())?;
            let scale = dimension.scale();
            let value = record
                .value(dimension.name())
                .unwrap_or_else(|| scale.domain().0);
            Some(ProjectedPoint {
                dimension: *id,
                x: *x,
                y: scale.map(value),
            })
        })
        .collect()
}
