use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::types::LineNumber;

/// Broad classification of a validation failure, for CI consumers that gate
/// on the failure family rather than the exact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing, unreadable, or not parseable as delimited text.
    Structural,
    /// A required column is absent from the header row.
    Schema,
    /// Nulls, non-numeric values, or implausible ranges in the data itself.
    DataQuality
}

/// Null statistics for one required column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullViolation {
    pub column: &'static str,
    pub count: u64,
    pub first_line: LineNumber
}

impl Display for NullViolation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {} null(s), first at line {}",
            self.column, self.count, self.first_line
        )
    }
}

/// The aggregate set of required-column null violations. The gate reports
/// every affected column at once rather than the first cell it happens upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullBreakdown(pub Vec<NullViolation>);

impl Display for NullBreakdown {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{violation}")?;
            first = false;
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unable to read the dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dataset is not parseable as delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("Required column [{column}] is missing from the header row")]
    MissingColumn {
        column: &'static str
    },
    #[error("Missing values detected in required columns -> {breakdown}")]
    RequiredNulls {
        breakdown: NullBreakdown
    },
    #[error("Non-numeric value [{value}] in column [{column}] at line {line}")]
    NonNumeric {
        column: &'static str,
        line: LineNumber,
        value: String
    },
    #[error("Implausible amount [{value}] in column [money] at line {line}")]
    ImplausibleAmount {
        line: LineNumber,
        value: String
    },
    #[error("Unparseable date [{value}] in column [Date] at line {line}")]
    InvalidDate {
        line: LineNumber,
        value: String
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Csv(_) => ErrorKind::Structural,
            Self::MissingColumn { .. } => ErrorKind::Schema,
            Self::RequiredNulls { .. }
            | Self::NonNumeric { .. }
            | Self::ImplausibleAmount { .. }
            | Self::InvalidDate { .. } => ErrorKind::DataQuality
        }
    }
}
