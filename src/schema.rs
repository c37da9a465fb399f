//! Column classification for the churn dataset.
//!
//! The schema is the single source of truth for which role every recognized
//! column plays. Every other component looks its column sets up here, so the
//! classification cannot drift between stages or between the fit and apply
//! paths.

use crate::error::{Error, Result};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Declares the disjoint column sets the pipeline operates on: the identifier
/// to drop, the two-valued gender column, the Yes/No binary columns, the
/// multi-category columns to one-hot encode, the numeric columns to scale and
/// the training-only target column.
///
/// The declaration order of each set is the canonical order used by every
/// downstream output.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    identifier: String,
    gender: String,
    target: String,
    binary: Vec<String>,
    categorical: Vec<String>,
    numeric: Vec<String>,
}

impl Schema {
    /// Builds a schema, rejecting any column claimed by more than one role.
    pub fn new(
        identifier: impl Into<String>,
        gender: impl Into<String>,
        target: impl Into<String>,
        binary: Vec<String>,
        categorical: Vec<String>,
        numeric: Vec<String>,
    ) -> Result<Self> {
        let schema = Self {
            identifier: identifier.into(),
            gender: gender.into(),
            target: target.into(),
            binary,
            categorical,
            numeric,
        };
        let mut seen = HashSet::new();
        for column in schema.all_columns() {
            if !seen.insert(column) {
                return Err(Error::AmbiguousColumn(column.to_string()));
            }
        }
        Ok(schema)
    }

    /// The fixed telco churn schema.
    pub fn churn() -> Self {
        let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            identifier: "customerID".to_string(),
            gender: "gender".to_string(),
            target: "Churn".to_string(),
            binary: owned(&[
                "SeniorCitizen",
                "Partner",
                "Dependents",
                "PhoneService",
                "PaperlessBilling",
            ]),
            categorical: owned(&[
                "MultipleLines",
                "InternetService",
                "OnlineSecurity",
                "OnlineBackup",
                "DeviceProtection",
                "TechSupport",
                "StreamingTV",
                "StreamingMovies",
                "Contract",
                "PaymentMethod",
            ]),
            numeric: owned(&["tenure", "MonthlyCharges", "TotalCharges"]),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn gender_column(&self) -> &str {
        &self.gender
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn binary_columns(&self) -> &[String] {
        &self.binary
    }

    pub fn categorical_columns(&self) -> &[String] {
        &self.categorical
    }

    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric
    }

    pub fn is_binary(&self, column: &str) -> bool {
        self.binary.iter().any(|c| c == column)
    }

    pub fn is_categorical(&self, column: &str) -> bool {
        self.categorical.iter().any(|c| c == column)
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric.iter().any(|c| c == column)
    }

    /// The columns that reach the feature table without encoding or scaling,
    /// in declaration order: gender first, then the binary columns.
    pub fn passthrough_columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.gender.as_str()).chain(self.binary.iter().map(String::as_str))
    }

    fn all_columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.identifier.as_str())
            .chain(std::iter::once(self.gender.as_str()))
            .chain(std::iter::once(self.target.as_str()))
            .chain(self.binary.iter().map(String::as_str))
            .chain(self.categorical.iter().map(String::as_str))
            .chain(self.numeric.iter().map(String::as_str))
    }
}
