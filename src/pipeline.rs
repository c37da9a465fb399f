//! The end-to-end fit/apply pipeline.

use ndarray::{s, Array1, Array2};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::normalize::FieldNormalizer;
use crate::one_hot::{FittedOneHotEncoder, OneHotEncoder};
use crate::record::{RawRecord, Value};
use crate::schema::Schema;
use crate::standard_scaling::{FittedStandardScaler, StandardScaler};
use crate::traits::{Fit, Transformer};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The unfitted pipeline: normalization, one-hot encoding and
/// standardization over one schema, in that fixed order.
///
/// [`fit`](Pipeline::fit) is the training entry point and is the only thing
/// that ever learns state. It hands back a [FittedPipeline] whose `transform`
/// reproduces the training-time feature schema byte for byte, which is the
/// contract the trained classifier depends on.
#[derive(Debug, Clone)]
pub struct Pipeline {
    schema: Schema,
}

impl Pipeline {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// A pipeline over the fixed telco churn schema.
    pub fn churn() -> Self {
        Self::new(Schema::churn())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fits the pipeline on a training batch, returning the training feature
    /// table and the fitted state to persist.
    ///
    /// One malformed record rejects the whole batch, with the record's index
    /// attached to the error; a partial batch must never leak into the
    /// fitted vocabulary or scale.
    pub fn fit<F: Float>(&self, records: &[RawRecord]) -> Result<(Frame<F>, FittedPipeline<F>)> {
        if records.is_empty() {
            return Err(Error::NotEnoughSamples);
        }
        let normalized = self.normalize_batch(records)?;
        for (row, record) in normalized.iter().enumerate() {
            for column in self.schema.passthrough_columns() {
                if !record.contains_key(column) {
                    return Err(Error::MissingColumn(column.to_string()).at_row(row));
                }
            }
        }
        let encoder = OneHotEncoder::new(&self.schema).fit(normalized.as_slice())?;
        let scaler = StandardScaler::new(&self.schema).fit(normalized.as_slice())?;
        let fitted = FittedPipeline::new(self.schema.clone(), encoder, scaler);
        let frame = fitted.assemble(&normalized);
        Ok((frame, fitted))
    }

    fn normalize_batch(&self, records: &[RawRecord]) -> Result<Vec<RawRecord>> {
        let normalizer = FieldNormalizer::new(&self.schema);
        records
            .iter()
            .enumerate()
            .map(|(row, record)| normalizer.normalize(record).map_err(|err| err.at_row(row)))
            .collect()
    }
}

/// Everything a serving process needs to reproduce training-time features:
/// the schema, the fitted one-hot vocabulary, the fitted standardization
/// parameters and the training-time feature column order.
///
/// Immutable after fit and free of interior mutability, so one instance can
/// be shared read-only across concurrent apply calls.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPipeline<F> {
    schema: Schema,
    encoder: FittedOneHotEncoder,
    scaler: FittedStandardScaler<F>,
    feature_names: Vec<String>,
}

impl<F: Float> FittedPipeline<F> {
    fn new(schema: Schema, encoder: FittedOneHotEncoder, scaler: FittedStandardScaler<F>) -> Self {
        let mut feature_names: Vec<String> = schema
            .passthrough_columns()
            .map(|c| c.to_string())
            .collect();
        feature_names.extend(encoder.feature_names());
        feature_names.extend(scaler.columns().iter().cloned());
        Self {
            schema,
            encoder,
            scaler,
            feature_names,
        }
    }

    /// Reassembles a pipeline from separately persisted artifacts. A missing
    /// part means training-time state never reached this process; that is a
    /// deployment bug and fails fast instead of defaulting.
    pub fn from_parts(
        schema: Schema,
        encoder: Option<FittedOneHotEncoder>,
        scaler: Option<FittedStandardScaler<F>>,
    ) -> Result<Self> {
        let encoder = encoder.ok_or(Error::MissingState("one-hot encoder"))?;
        let scaler = scaler.ok_or(Error::MissingState("standard scaler"))?;
        Ok(Self::new(schema, encoder, scaler))
    }

    /// The training-time feature column order every transform reproduces.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn encoder(&self) -> &FittedOneHotEncoder {
        &self.encoder
    }

    pub fn scaler(&self) -> &FittedStandardScaler<F> {
        &self.scaler
    }

    /// Applies the fitted transforms to a batch, producing a frame with
    /// exactly the column schema captured at fit time.
    pub fn transform(&self, records: &[RawRecord]) -> Result<Frame<F>> {
        let normalizer = FieldNormalizer::new(&self.schema);
        let normalized = records
            .iter()
            .enumerate()
            .map(|(row, record)| normalizer.normalize(record).map_err(|err| err.at_row(row)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.assemble(&normalized))
    }

    /// Single-record serving path: the feature vector for one raw record.
    pub fn transform_record(&self, record: &RawRecord) -> Result<Array1<F>> {
        let frame = self.transform(std::slice::from_ref(record))?;
        Ok(frame.row(0).to_owned())
    }

    /// Concatenates the passthrough, one-hot and scaled blocks in the
    /// canonical column order and pulls the target column out when every
    /// record carries one.
    fn assemble(&self, normalized: &[RawRecord]) -> Frame<F> {
        let passthrough: Vec<&str> = self.schema.passthrough_columns().collect();
        let mut records = Array2::zeros((normalized.len(), self.feature_names.len()));
        for (row, record) in normalized.iter().enumerate() {
            for (index, column) in passthrough.iter().enumerate() {
                records[(row, index)] = record
                    .get(*column)
                    .and_then(Value::as_f64)
                    .map(F::cast)
                    .unwrap_or_else(F::zero);
            }
        }
        let encoded: Array2<F> = self.encoder.transform(normalized);
        let offset = passthrough.len();
        records
            .slice_mut(s![.., offset..offset + encoded.ncols()])
            .assign(&encoded);
        let scaled: Array2<F> = self.scaler.transform(normalized);
        records
            .slice_mut(s![.., offset + encoded.ncols()..])
            .assign(&scaled);

        let frame = Frame::new(self.feature_names.clone(), records);
        let target = self.schema.target();
        if !normalized.is_empty() && normalized.iter().all(|r| r.contains_key(target)) {
            let targets = normalized
                .iter()
                .map(|record| {
                    record
                        .get(target)
                        .and_then(Value::as_f64)
                        .map(F::cast)
                        .unwrap_or_else(F::zero)
                })
                .collect::<Array1<F>>();
            frame.with_targets(targets)
        } else {
            frame
        }
    }
}
