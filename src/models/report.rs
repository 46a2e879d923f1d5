use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Min, max, and rounded mean for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSummary {
    pub min: Decimal,
    pub max: Decimal,
    pub mean: Decimal
}

/// First and last calendar dates covered by the dataset. The span is a pair
/// of bounds, not a claim that every day in between has sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub first: NaiveDate,
    pub last: NaiveDate
}

impl DateSpan {
    pub fn days(&self) -> i64 {
        (self.last - self.first).num_days()
    }
}

/// Summary statistics produced by a successful validation pass.
///
/// Ephemeral: it is produced, printed or inspected, and discarded.
/// All collections are ordered so that validating the same file twice yields
/// an identical report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub row_count: u64,
    /// Null counts per required column. All zero on the success path.
    pub null_counts: BTreeMap<&'static str, u64>,
    pub numeric_summaries: BTreeMap<&'static str, NumericSummary>,
    /// Distinct values and their frequencies per open categorical column.
    pub categorical_coverage: BTreeMap<&'static str, BTreeMap<String, u64>>,
    pub date_span: Option<DateSpan>
}

impl Display for ValidationReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Loaded {} rows", self.row_count)?;

        writeln!(formatter)?;
        writeln!(formatter, "Null counts in required columns:")?;
        for (column, count) in &self.null_counts {
            writeln!(formatter, "  {column}: {count}")?;
        }

        if !self.numeric_summaries.is_empty() {
            writeln!(formatter)?;
            writeln!(formatter, "Numeric columns:")?;
            for (column, summary) in &self.numeric_summaries {
                writeln!(
                    formatter,
                    "  {column}: min={} max={} mean={}",
                    summary.min, summary.max, summary.mean
                )?;
            }
        }

        if let Some(span) = &self.date_span {
            writeln!(formatter)?;
            writeln!(
                formatter,
                "Calendar coverage: {} -> {} ({} days)",
                span.first,
                span.last,
                span.days()
            )?;
        }

        for (column, values) in &self.categorical_coverage {
            writeln!(formatter)?;
            writeln!(formatter, "Distinct values in [{column}]:")?;
            for (value, count) in values {
                writeln!(formatter, "  {value}: {count}")?;
            }
        }

        Ok(())
    }
}
