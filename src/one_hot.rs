//! One-hot encoding over the schema's multi-category columns.

use std::collections::BTreeSet;

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};
use crate::record::RawRecord;
use crate::schema::Schema;
use crate::traits::{Fit, Transformer};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Learns a category vocabulary for every categorical column declared by the
/// schema, producing a [FittedOneHotEncoder] that projects any later record
/// onto exactly that vocabulary.
///
/// The vocabulary order is deterministic: columns in schema declaration
/// order, categories sorted lexicographically within each column.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    columns: Vec<String>,
}

impl OneHotEncoder {
    pub fn new(schema: &Schema) -> Self {
        Self {
            columns: schema.categorical_columns().to_vec(),
        }
    }
}

impl Fit<[RawRecord]> for OneHotEncoder {
    type Object = Result<FittedOneHotEncoder>;

    /// Collects the set of observed categories per declared column. A
    /// declared column absent from any record rejects the whole batch, so a
    /// malformed record can never silently shrink the vocabulary.
    fn fit(&self, records: &[RawRecord]) -> Self::Object {
        if records.is_empty() {
            return Err(Error::NotEnoughSamples);
        }
        let mut vocabulary = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let mut categories = BTreeSet::new();
            for record in records {
                let value = record
                    .get(column)
                    .ok_or_else(|| Error::MissingColumn(column.clone()))?;
                categories.insert(value.to_string());
            }
            vocabulary.push((column.clone(), categories.into_iter().collect()));
        }
        Ok(FittedOneHotEncoder { vocabulary })
    }
}

/// The fitted one-hot vocabulary. Immutable after fit: applying it never
/// changes the output column set or order, whatever categories the input
/// carries.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedOneHotEncoder {
    vocabulary: Vec<(String, Vec<String>)>,
}

impl FittedOneHotEncoder {
    /// Output column names in row order, one `{column}_{category}` name per
    /// vocabulary entry.
    pub fn feature_names(&self) -> Vec<String> {
        self.vocabulary
            .iter()
            .flat_map(|(column, categories)| {
                categories
                    .iter()
                    .map(move |category| format!("{}_{}", column, category))
            })
            .collect()
    }

    pub fn n_features(&self) -> usize {
        self.vocabulary
            .iter()
            .map(|(_, categories)| categories.len())
            .sum()
    }

    /// The learned categories for one column, if the column was fitted.
    pub fn categories(&self, column: &str) -> Option<&[String]> {
        self.vocabulary
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, categories)| categories.as_slice())
    }

    /// Encodes one record. A category never seen during fitting, or an
    /// absent column, encodes as all zeros across that column's group; no
    /// value can add a column or raise an error here.
    pub fn encode_record<F: Float>(&self, record: &RawRecord) -> Array1<F> {
        let mut row = Array1::zeros(self.n_features());
        let mut offset = 0;
        for (column, categories) in &self.vocabulary {
            if let Some(value) = record.get(column) {
                let label = value.to_string();
                if let Some(position) = categories.iter().position(|c| *c == label) {
                    row[offset + position] = F::one();
                }
            }
            offset += categories.len();
        }
        row
    }
}

impl<'a, F: Float> Transformer<&'a [RawRecord], Array2<F>> for FittedOneHotEncoder {
    fn transform(&self, records: &'a [RawRecord]) -> Array2<F> {
        let mut out = Array2::zeros((records.len(), self.n_features()));
        for (mut row, record) in out.axis_iter_mut(Axis(0)).zip(records) {
            row.assign(&self.encode_record(record));
        }
        out
    }
}
