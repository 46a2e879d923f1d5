use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::LineNumber;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Required field [{column}] is empty at line {line}")]
    MissingField {
        column: &'static str,
        line: LineNumber
    },
    #[error("Field [{column}] has value [{value}] which is not a valid {expected} at line {line}")]
    InvalidValue {
        column: &'static str,
        line: LineNumber,
        value: String,
        expected: &'static str
    },
    #[error("Field [hour_of_day] is {hour} but the Time component says {timestamp_hour} at line {line}")]
    HourMismatch {
        line: LineNumber,
        hour: u8,
        timestamp_hour: u8
    },
    #[error("Precomputed field [{column}] is [{found}] but derives to [{expected}] at line {line}")]
    DerivedMismatch {
        column: &'static str,
        line: LineNumber,
        found: String,
        expected: String
    },
    #[error("Amount [{amount}] must not be negative at line {line}")]
    NegativeAmount {
        line: LineNumber,
        amount: Decimal
    },
    #[error("Numeric overflow while deriving the margin at line {line}")]
    MarginOverflow {
        line: LineNumber
    }
}

impl RecordError {
    pub fn missing_field(column: &'static str, line: LineNumber) -> Self {
        Self::MissingField { column, line }
    }

    pub fn invalid_value(column: &'static str, line: LineNumber, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            column,
            line,
            value: value.to_string(),
            expected
        }
    }

    pub fn derived_mismatch(column: &'static str, line: LineNumber, found: &str, expected: &str) -> Self {
        Self::DerivedMismatch {
            column,
            line,
            found: found.to_string(),
            expected: expected.to_string()
        }
    }
}
