//! Shared test fixtures: the first few rows of the telco churn dataset and
//! the serving-time request record used across module tests.

use crate::record::{RawRecord, Value};

pub(crate) fn record(fields: &[(&str, Value)]) -> RawRecord {
    fields
        .iter()
        .map(|(column, value)| (column.to_string(), value.clone()))
        .collect()
}

pub(crate) fn training_batch() -> Vec<RawRecord> {
    vec![
        record(&[
            ("customerID", "7590-VHVEG".into()),
            ("gender", "Female".into()),
            ("SeniorCitizen", "No".into()),
            ("Partner", "Yes".into()),
            ("Dependents", "No".into()),
            ("tenure", 1.into()),
            ("PhoneService", "Yes".into()),
            ("MultipleLines", "No".into()),
            ("InternetService", "DSL".into()),
            ("OnlineSecurity", "No".into()),
            ("OnlineBackup", "Yes".into()),
            ("DeviceProtection", "No".into()),
            ("TechSupport", "No".into()),
            ("StreamingTV", "No".into()),
            ("StreamingMovies", "No".into()),
            ("Contract", "Month-to-month".into()),
            ("PaperlessBilling", "Yes".into()),
            ("PaymentMethod", "Electronic check".into()),
            ("MonthlyCharges", 29.85.into()),
            ("TotalCharges", "29.85".into()),
            ("Churn", "No".into()),
        ]),
        record(&[
            ("customerID", "5575-GNVDE".into()),
            ("gender", "Male".into()),
            // the already-encoded integer form the source data sometimes uses
            ("SeniorCitizen", 1.into()),
            ("Partner", "No".into()),
            ("Dependents", "No".into()),
            ("tenure", 34.into()),
            ("PhoneService", "Yes".into()),
            ("MultipleLines", "Yes".into()),
            ("InternetService", "Fiber optic".into()),
            ("OnlineSecurity", "Yes".into()),
            ("OnlineBackup", "No".into()),
            ("DeviceProtection", "Yes".into()),
            ("TechSupport", "No".into()),
            ("StreamingTV", "Yes".into()),
            ("StreamingMovies", "No".into()),
            ("Contract", "One year".into()),
            ("PaperlessBilling", "No".into()),
            ("PaymentMethod", "Mailed check".into()),
            ("MonthlyCharges", 56.95.into()),
            ("TotalCharges", "1889.5".into()),
            ("Churn", "No".into()),
        ]),
        record(&[
            ("customerID", "3668-QPYBK".into()),
            ("gender", "Male".into()),
            ("SeniorCitizen", "No".into()),
            ("Partner", "No".into()),
            ("Dependents", "No".into()),
            ("tenure", 2.into()),
            ("PhoneService", "No".into()),
            ("MultipleLines", "No phone service".into()),
            ("InternetService", "DSL".into()),
            ("OnlineSecurity", "Yes".into()),
            ("OnlineBackup", "Yes".into()),
            ("DeviceProtection", "No".into()),
            ("TechSupport", "No".into()),
            ("StreamingTV", "No".into()),
            ("StreamingMovies", "No".into()),
            ("Contract", "Month-to-month".into()),
            ("PaperlessBilling", "Yes".into()),
            ("PaymentMethod", "Electronic check".into()),
            ("MonthlyCharges", 53.85.into()),
            ("TotalCharges", "108.15".into()),
            ("Churn", "Yes".into()),
        ]),
        record(&[
            ("customerID", "7795-CFOCW".into()),
            ("gender", "Female".into()),
            ("SeniorCitizen", "No".into()),
            ("Partner", "Yes".into()),
            ("Dependents", "Yes".into()),
            ("tenure", 45.into()),
            ("PhoneService", "No".into()),
            ("MultipleLines", "No phone service".into()),
            ("InternetService", "DSL".into()),
            ("OnlineSecurity", "Yes".into()),
            ("OnlineBackup", "No".into()),
            ("DeviceProtection", "Yes".into()),
            ("TechSupport", "Yes".into()),
            ("StreamingTV", "No".into()),
            ("StreamingMovies", "No".into()),
            ("Contract", "One year".into()),
            ("PaperlessBilling", "No".into()),
            ("PaymentMethod", "Bank transfer (automatic)".into()),
            ("MonthlyCharges", 42.30.into()),
            ("TotalCharges", "1840.75".into()),
            ("Churn", "No".into()),
        ]),
    ]
}

/// The request-body record from the serving boundary: typed numerics where
/// JSON types them, `TotalCharges` still a string.
pub(crate) fn serving_record() -> RawRecord {
    record(&[
        ("gender", "Female".into()),
        ("SeniorCitizen", "No".into()),
        ("Partner", "Yes".into()),
        ("Dependents", "No".into()),
        ("tenure", 12.into()),
        ("PhoneService", "Yes".into()),
        ("MultipleLines", "No".into()),
        ("InternetService", "DSL".into()),
        ("OnlineSecurity", "No".into()),
        ("OnlineBackup", "Yes".into()),
        ("DeviceProtection", "No".into()),
        ("TechSupport", "No".into()),
        ("StreamingTV", "No".into()),
        ("StreamingMovies", "No".into()),
        ("Contract", "Month-to-month".into()),
        ("PaperlessBilling", "Yes".into()),
        ("PaymentMethod", "Electronic check".into()),
        ("MonthlyCharges", 70.35.into()),
        ("TotalCharges", "845.5".into()),
    ])
}
