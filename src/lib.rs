//! `churn-preprocessing` turns raw telco customer-churn records into the
//! fixed-width numeric feature vectors a binary churn classifier consumes.
//!
//! The crate is built around a fit/apply contract: every stateful stage is
//! split into an unfitted parameter struct and a fitted struct. Fitting a
//! [`Pipeline`](pipeline::Pipeline) on a training batch learns the one-hot
//! vocabulary and the per-column standardization parameters and freezes them
//! into a [`FittedPipeline`](pipeline::FittedPipeline); applying the fitted
//! pipeline later, in the same process or after a serde round trip in a
//! serving process, reproduces the training-time feature schema exactly.
//! Unknown categories encode to an all-zero group and never extend the
//! schema, so the classifier's input dimensionality stays fixed for the
//! lifetime of the fitted artifact.
//!
//! ### Example
//!
//! ```rust
//! use churn_preprocessing::pipeline::Pipeline;
//! use churn_preprocessing::record::{RawRecord, Value};
//!
//! let batch: Vec<RawRecord> = vec![
//!     vec![
//!         ("gender", Value::from("Female")),
//!         ("SeniorCitizen", Value::from("No")),
//!         ("Partner", Value::from("Yes")),
//!         ("Dependents", Value::from("No")),
//!         ("tenure", Value::from(12)),
//!         ("PhoneService", Value::from("Yes")),
//!         ("MultipleLines", Value::from("No")),
//!         ("InternetService", Value::from("DSL")),
//!         ("OnlineSecurity", Value::from("No")),
//!         ("OnlineBackup", Value::from("Yes")),
//!         ("DeviceProtection", Value::from("No")),
//!         ("TechSupport", Value::from("No")),
//!         ("StreamingTV", Value::from("No")),
//!         ("StreamingMovies", Value::from("No")),
//!         ("Contract", Value::from("Month-to-month")),
//!         ("PaperlessBilling", Value::from("Yes")),
//!         ("PaymentMethod", Value::from("Electronic check")),
//!         ("MonthlyCharges", Value::from(70.35)),
//!         ("TotalCharges", Value::from("845.5")),
//!     ]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v))
//!     .collect(),
//! ];
//!
//! let (table, fitted) = Pipeline::churn().fit::<f64>(&batch).unwrap();
//! let vector = fitted.transform_record(&batch[0]).unwrap();
//! assert_eq!(vector.len(), table.feature_names().len());
//! ```

pub mod error;
pub mod frame;
pub mod normalize;
pub mod one_hot;
pub mod pipeline;
pub mod record;
pub mod schema;
pub mod standard_scaling;
mod traits;

#[cfg(test)]
pub(crate) mod test_data;

pub use traits::{Fit, Transformer};

use ndarray::NdFloat;
use num_traits::{FromPrimitive, NumCast};
use std::iter::Sum;

/// Floating point numbers the pipeline can produce feature tables over.
///
/// Implemented for `f32` and `f64`.
pub trait Float: NdFloat + FromPrimitive + Default + Sum {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}
