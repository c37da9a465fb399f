//! Named numeric feature tables.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// An ordered numeric feature table: the pipeline's output. Column order is
/// part of the value; a classifier fitted on one frame expects every later
/// frame to carry the same names in the same positions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<F> {
    feature_names: Vec<String>,
    records: Array2<F>,
    targets: Option<Array1<F>>,
}

impl<F: Float> Frame<F> {
    /// Builds a frame; `feature_names` must name `records`' columns in order.
    pub fn new(feature_names: Vec<String>, records: Array2<F>) -> Self {
        debug_assert_eq!(feature_names.len(), records.ncols());
        Self {
            feature_names,
            records,
            targets: None,
        }
    }

    pub fn with_targets(mut self, targets: Array1<F>) -> Self {
        debug_assert_eq!(targets.len(), self.records.nrows());
        self.targets = Some(targets);
        self
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    /// The extracted label column, present only when every input record
    /// carried one.
    pub fn targets(&self) -> Option<&Array1<F>> {
        self.targets.as_ref()
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, F> {
        self.records.row(index)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, F>> {
        self.feature_names
            .iter()
            .position(|n| n == name)
            .map(|index| self.records.column(index))
    }

    /// Projects the frame onto `order`: columns the frame lacks fill with
    /// zeros, columns `order` does not name are dropped. Used to line a
    /// served feature table up with the training-time column order before it
    /// reaches the classifier.
    pub fn reindex(&self, order: &[String]) -> Frame<F> {
        let mut records = Array2::zeros((self.records.nrows(), order.len()));
        for (index, name) in order.iter().enumerate() {
            if let Some(column) = self.column(name) {
                records.index_axis_mut(Axis(1), index).assign(&column);
            }
        }
        Frame {
            feature_names: order.to_vec(),
            records,
            targets: self.targets.clone(),
        }
    }
}
