//! Error definitions for the churn preprocessing pipeline
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A value fell outside its schema-declared domain. Recoverable only by
    /// rejecting the record that carried it.
    #[error("schema violation in column {column:?}: unexpected value {value:?}")]
    SchemaViolation { column: String, value: String },
    /// A declared column was absent from a record while fitting.
    #[error("column {0:?} is missing from the fit batch")]
    MissingColumn(String),
    #[error("not enough samples")]
    NotEnoughSamples,
    /// Required fitted state was absent in apply mode. This is a deployment
    /// ordering bug, not a data problem, and must not be defaulted away.
    #[error("missing fitted state: {0}")]
    MissingState(&'static str),
    /// Two schema roles claim the same column.
    #[error("column {0:?} declared in more than one schema role")]
    AmbiguousColumn(String),
    /// Wraps the error a specific record of a batch produced.
    #[error("record {row}: {source}")]
    BadRecord {
        row: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn at_row(self, row: usize) -> Self {
        Error::BadRecord {
            row,
            source: Box::new(self),
        }
    }
}
