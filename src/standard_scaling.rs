//! Standardization of the schema's numeric columns.

use std::marker::PhantomData;

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};
use crate::record::{RawRecord, Value};
use crate::schema::Schema;
use crate::traits::{Fit, Transformer};
use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Learns per-column mean and standard deviation for the schema's numeric
/// columns, producing a [FittedStandardScaler] that standardizes later data
/// with the same parameters.
#[derive(Debug, Clone)]
pub struct StandardScaler<F: Float> {
    columns: Vec<String>,
    marker: PhantomData<F>,
}

impl<F: Float> StandardScaler<F> {
    pub fn new(schema: &Schema) -> Self {
        Self {
            columns: schema.numeric_columns().to_vec(),
            marker: PhantomData,
        }
    }
}

impl<F: Float> Fit<[RawRecord]> for StandardScaler<F> {
    type Object = Result<FittedStandardScaler<F>>;

    /// Computes mean and population standard deviation per declared numeric
    /// column. A declared column absent from any record rejects the batch.
    fn fit(&self, records: &[RawRecord]) -> Self::Object {
        if records.is_empty() {
            return Err(Error::NotEnoughSamples);
        }
        let mut means = Array1::zeros(self.columns.len());
        let mut std_devs = Array1::zeros(self.columns.len());
        for (index, column) in self.columns.iter().enumerate() {
            let mut values = Array1::zeros(records.len());
            for (value, record) in values.iter_mut().zip(records) {
                let cell = record
                    .get(column)
                    .ok_or_else(|| Error::MissingColumn(column.clone()))?;
                *value = F::cast(cell.as_f64().unwrap_or(0.0));
            }
            means[index] = values.mean().unwrap_or_else(F::zero);
            std_devs[index] = values.std(F::zero());
        }
        Ok(FittedStandardScaler {
            columns: self.columns.clone(),
            means,
            std_devs,
        })
    }
}

/// The fitted standardization parameters, immutable after fit.
///
/// The raw standard deviations are stored as fitted; a column that was
/// constant in the fit batch keeps its `0` and the division guard lives in
/// the transform.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct FittedStandardScaler<F> {
    columns: Vec<String>,
    means: Array1<F>,
    std_devs: Array1<F>,
}

impl<F: Float> FittedStandardScaler<F> {
    /// The scaled columns, in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn means(&self) -> &Array1<F> {
        &self.means
    }

    pub fn std_devs(&self) -> &Array1<F> {
        &self.std_devs
    }

    /// Standardizes one record's numeric columns as `(x - mean) / std_dev`.
    /// A zero fitted standard deviation degrades to a pure mean shift
    /// instead of a division by zero.
    pub fn scale_record(&self, record: &RawRecord) -> Array1<F> {
        let mut row = Array1::zeros(self.columns.len());
        for (index, column) in self.columns.iter().enumerate() {
            let x = record
                .get(column)
                .and_then(Value::as_f64)
                .map(F::cast)
                .unwrap_or_else(F::zero);
            let std_dev = self.std_devs[index];
            let divisor = if std_dev == F::zero() {
                F::one()
            } else {
                std_dev
            };
            row[index] = (x - self.means[index]) / divisor;
        }
        row
    }
}

impl<'a, F: Float> Transformer<&'a [RawRecord], Array2<F>> for FittedStandardScaler<F> {
    fn transform(&self, records: &'a [RawRecord]) -> Array2<F> {
        let mut out = Array2::zeros((records.len(), self.columns.len()));
        for (mut row, record) in out.axis_iter_mut(Axis(0)).zip(records) {
            row.assign(&self.scale_record(record));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::record;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn tenure_schema() -> Schema {
        Schema::new(
            "customerID",
            "gender",
            "Churn",
            vec![],
            vec![],
            vec!["tenure".to_string(), "MonthlyCharges".to_string()],
        )
        .unwrap()
    }

    fn tenure_batch() -> Vec<RawRecord> {
        vec![
            record(&[("tenure", 10.into()), ("MonthlyCharges", 5.into())]),
            record(&[("tenure", 20.into()), ("MonthlyCharges", 5.into())]),
            record(&[("tenure", 30.into()), ("MonthlyCharges", 5.into())]),
        ]
    }

    #[test]
    fn fits_mean_and_population_std() {
        let scaler = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&tenure_batch())
            .unwrap();
        assert_abs_diff_eq!(scaler.means()[0], 20.0);
        assert_abs_diff_eq!(scaler.std_devs()[0], (200.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn centers_the_fitted_mean_on_zero() {
        let scaler = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&tenure_batch())
            .unwrap();
        let row = scaler.scale_record(&record(&[
            ("tenure", 20.into()),
            ("MonthlyCharges", 5.into()),
        ]));
        assert_abs_diff_eq!(row[0], 0.0);
    }

    #[test]
    fn zero_variance_column_degrades_to_mean_shift() {
        let scaler = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&tenure_batch())
            .unwrap();
        assert_abs_diff_eq!(scaler.std_devs()[1], 0.0);
        let row = scaler.scale_record(&record(&[
            ("tenure", 20.into()),
            ("MonthlyCharges", 5.into()),
        ]));
        assert!(row[1].is_finite());
        assert_abs_diff_eq!(row[1], 0.0);
        let row = scaler.scale_record(&record(&[
            ("tenure", 20.into()),
            ("MonthlyCharges", 7.into()),
        ]));
        assert_abs_diff_eq!(row[1], 2.0);
    }

    #[test]
    fn batch_transform_standardizes_the_fit_batch() {
        let batch = tenure_batch();
        let scaler = StandardScaler::<f64>::new(&tenure_schema()).fit(&batch).unwrap();
        let scaled: Array2<f64> = scaler.transform(batch.as_slice());
        let means = scaled.mean_axis(Axis(0)).unwrap();
        assert_abs_diff_eq!(means, array![0.0, 0.0], epsilon = 1e-12);
        let std_devs = scaled.std_axis(Axis(0), 0.0);
        assert_abs_diff_eq!(std_devs[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn fitting_requires_every_declared_column() {
        let batch = vec![record(&[("tenure", 10.into())])];
        let err = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&batch)
            .unwrap_err();
        assert_eq!(err, Error::MissingColumn("MonthlyCharges".to_string()));
    }

    #[test]
    fn fitting_an_empty_batch_fails() {
        let err = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&[])
            .unwrap_err();
        assert_eq!(err, Error::NotEnoughSamples);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn fitted_parameters_round_trip() {
        let scaler = StandardScaler::<f64>::new(&tenure_schema())
            .fit(&tenure_batch())
            .unwrap();
        let json = serde_json::to_string(&scaler).unwrap();
        let restored: FittedStandardScaler<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, scaler);
    }
}
