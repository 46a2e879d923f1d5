use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{DateSpan, NumericSummary, RawSale, ValidationReport};
use crate::types::LineNumber;
use crate::validator::errors::{NullBreakdown, NullViolation, ValidationError};

/// Columns that must be present and fully populated.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Time", "coffee_name", "money"];
/// Columns that must parse as numbers whenever they are present.
pub const NUMERIC_COLUMNS: [&str; 4] = ["money", "hour_of_day", "Weekdaysort", "Monthsort"];
/// Open-set categorical columns reported for coverage, never enforced.
pub const CATEGORICAL_COLUMNS: [&str; 2] = ["coffee_name", "cash_type"];

/// A parsed CSV: the header row plus every data row, still untyped.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawSale>
}

impl RawTable {
    /// Reads a headered CSV from disk. Only structural problems can fail
    /// here; content checks belong to the validator.
    pub fn read(path: &Path) -> Result<Self, ValidationError> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for result in reader.deserialize::<RawSale>() {
            rows.push(result?);
        }

        Ok(Self { headers, rows })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// 1-based file line number for a data row index. The header is line 1.
    fn line_of(&self, index: usize) -> LineNumber {
        index as LineNumber + 2
    }
}

/// Fail-fast data-quality gate over the sales CSV.
///
/// Stateless and read-only: a validation pass is a pure function of the file
/// contents, so it can run repeatedly (or from several threads) against the
/// same path with no coordination, and an unchanged file always produces an
/// identical report.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates the CSV at `path`, producing summary statistics or the
    /// first violated check.
    pub fn validate_file(path: &Path) -> Result<ValidationReport, ValidationError> {
        let table = RawTable::read(path)?;
        let report = Self::validate_table(&table)?;

        debug!("Validated {} rows from {}", report.row_count, path.display());

        Ok(report)
    }

    /// Runs every check against an already-parsed table.
    pub fn validate_table(table: &RawTable) -> Result<ValidationReport, ValidationError> {
        Self::check_required_columns(table)?;

        let null_counts = Self::check_required_nulls(table)?;
        let numeric_summaries = Self::check_numeric_columns(table)?;
        let date_span = Self::check_date_span(table)?;
        let categorical_coverage = Self::categorical_coverage(table);

        Ok(ValidationReport {
            row_count: table.rows.len() as u64,
            null_counts,
            numeric_summaries,
            categorical_coverage,
            date_span
        })
    }

    fn check_required_columns(table: &RawTable) -> Result<(), ValidationError> {
        for column in REQUIRED_COLUMNS {
            if !table.has_column(column) {
                return Err(ValidationError::MissingColumn { column });
            }
        }

        Ok(())
    }

    /// Counts nulls per required column. Any null is a hard failure; the
    /// error carries the per-column breakdown with a representative line.
    fn check_required_nulls(table: &RawTable) -> Result<BTreeMap<&'static str, u64>, ValidationError> {
        let mut counts: BTreeMap<&'static str, u64> =
            REQUIRED_COLUMNS.iter().map(|column| (*column, 0)).collect();
        let mut first_lines: BTreeMap<&'static str, LineNumber> = BTreeMap::new();

        for (index, row) in table.rows.iter().enumerate() {
            for column in REQUIRED_COLUMNS {
                if row.column(column).is_none() {
                    *counts.entry(column).or_insert(0) += 1;
                    first_lines.entry(column).or_insert(table.line_of(index));
                }
            }
        }

        if !first_lines.is_empty() {
            let violations = first_lines
                .iter()
                .map(|(column, first_line)| NullViolation {
                    column: *column,
                    count: counts.get(column).copied().unwrap_or(0),
                    first_line: *first_line
                })
                .collect();

            return Err(ValidationError::RequiredNulls {
                breakdown: NullBreakdown(violations)
            });
        }

        Ok(counts)
    }

    fn check_numeric_columns(table: &RawTable) -> Result<BTreeMap<&'static str, NumericSummary>, ValidationError> {
        let mut summaries = BTreeMap::new();

        for column in NUMERIC_COLUMNS {
            if !table.has_column(column) {
                continue;
            }

            let mut values = Vec::new();
            for (index, row) in table.rows.iter().enumerate() {
                let Some(value) = row.column(column) else {
                    continue;
                };

                let parsed = Decimal::from_str(value).map_err(|_| ValidationError::NonNumeric {
                    column,
                    line: table.line_of(index),
                    value: value.to_string()
                })?;

                // No negative tickets
                if column == "money" && parsed < Decimal::ZERO {
                    return Err(ValidationError::ImplausibleAmount {
                        line: table.line_of(index),
                        value: value.to_string()
                    });
                }

                values.push(parsed);
            }

            if let Some(summary) = summarize(&values) {
                summaries.insert(column, summary);
            }
        }

        Ok(summaries)
    }

    fn check_date_span(table: &RawTable) -> Result<Option<DateSpan>, ValidationError> {
        let mut span: Option<DateSpan> = None;

        for (index, row) in table.rows.iter().enumerate() {
            let Some(value) = row.column("Date") else {
                continue;
            };

            let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                ValidationError::InvalidDate {
                    line: table.line_of(index),
                    value: value.to_string()
                }
            })?;

            span = Some(match span {
                Some(current) => DateSpan {
                    first: current.first.min(date),
                    last: current.last.max(date)
                },
                None => DateSpan { first: date, last: date }
            });
        }

        Ok(span)
    }

    fn categorical_coverage(table: &RawTable) -> BTreeMap<&'static str, BTreeMap<String, u64>> {
        let mut coverage = BTreeMap::new();

        for column in CATEGORICAL_COLUMNS {
            if !table.has_column(column) {
                continue;
            }

            let mut values: BTreeMap<String, u64> = BTreeMap::new();
            for row in &table.rows {
                if let Some(value) = row.column(column) {
                    *values.entry(value.to_string()).or_insert(0) += 1;
                }
            }

            coverage.insert(column, values);
        }

        coverage
    }
}

fn summarize(values: &[Decimal]) -> Option<NumericSummary> {
    let first = *values.first()?;
    let mut min = first;
    let mut max = first;
    let mut total = Decimal::ZERO;

    for value in values {
        min = min.min(*value);
        max = max.max(*value);
        total += *value;
    }

    let mean = total
        .checked_div(Decimal::from(values.len() as u64))
        .unwrap_or(Decimal::ZERO)
        .round_dp(2);

    Some(NumericSummary { min, max, mean })
}
