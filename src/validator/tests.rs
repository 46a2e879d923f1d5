use super::{ErrorKind, SchemaValidator, ValidationError};

use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

fn create_temporary_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{header}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

const HEADER: &str = "Date,Time,coffee_name,money,cash_type";

#[test]
fn test_validator_summarizes_a_clean_dataset() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30.120,Latte,18.12,card",
            "2025-03-03,13:40:00,Cappuccino,38.70,card",
            "2025-03-05,07:05:12,Americano,25.00,card",
        ],
    )?;

    let report = SchemaValidator::validate_file(file.path())?;

    assert_eq!(report.row_count, 3);
    assert!(report.null_counts.values().all(|count| *count == 0));

    let money = report.numeric_summaries.get("money").expect("money summary missing");
    assert_eq!(money.min, Decimal::from_str("18.12")?);
    assert_eq!(money.max, Decimal::from_str("38.70")?);
    assert_eq!(money.mean, Decimal::from_str("27.27")?);

    let span = report.date_span.expect("date span missing");
    assert_eq!(span.first, NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid date"));
    assert_eq!(span.last, NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date"));
    assert_eq!(span.days(), 2);

    let products = report.categorical_coverage.get("coffee_name").expect("coverage missing");
    assert_eq!(products.len(), 3);
    assert_eq!(products.get("Latte"), Some(&1));

    Ok(())
}

#[test]
fn test_validation_is_idempotent_for_an_unchanged_file() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30,Latte,18.12,card",
            "2025-03-04,09:00:00,Tea,2.90,cash",
        ],
    )?;

    let first = SchemaValidator::validate_file(file.path())?;
    let second = SchemaValidator::validate_file(file.path())?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_missing_money_column_is_a_schema_failure_naming_the_column() -> Result<()> {
    let file = create_temporary_csv(
        "Date,Time,coffee_name,cash_type",
        &["2025-03-03,08:15:30,Latte,card"],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::Schema);
    assert!(matches!(error, ValidationError::MissingColumn { column: "money" }));
    assert!(error.to_string().contains("money"));

    Ok(())
}

#[test]
fn test_blank_date_cell_is_reported_with_column_and_line() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30,Latte,18.12,card",
            ",09:00:00,Tea,2.90,card",
        ],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::DataQuality);

    let ValidationError::RequiredNulls { breakdown } = &error else {
        panic!("expected a required-null failure, got {error}");
    };

    assert_eq!(breakdown.0.len(), 1);
    assert_eq!(breakdown.0[0].column, "Date");
    assert_eq!(breakdown.0[0].count, 1);
    assert_eq!(breakdown.0[0].first_line, 3);

    Ok(())
}

#[test]
fn test_null_breakdown_covers_every_affected_column() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            ",08:15:30,Latte,18.12,card",
            "2025-03-04,,Tea,,card",
        ],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    let ValidationError::RequiredNulls { breakdown } = &error else {
        panic!("expected a required-null failure, got {error}");
    };

    let columns: Vec<&str> = breakdown.0.iter().map(|violation| violation.column).collect();
    assert_eq!(columns, vec!["Date", "Time", "money"]);

    Ok(())
}

#[test]
fn test_single_valued_payment_method_is_valid() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30,Latte,4.75,card",
            "2025-03-04,09:00:00,Tea,2.90,card",
        ],
    )?;

    let report = SchemaValidator::validate_file(file.path())?;

    let methods = report.categorical_coverage.get("cash_type").expect("coverage missing");
    assert_eq!(methods.len(), 1);
    assert_eq!(methods.get("card"), Some(&2));

    Ok(())
}

#[test]
fn test_new_payment_method_is_informational_not_an_error() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30,Latte,4.75,card",
            "2025-03-04,09:00:00,Tea,2.90,mobile_wallet",
        ],
    )?;

    let report = SchemaValidator::validate_file(file.path())?;

    let methods = report.categorical_coverage.get("cash_type").expect("coverage missing");
    assert_eq!(methods.len(), 2);

    Ok(())
}

#[test]
fn test_non_numeric_money_is_a_data_quality_failure() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &["2025-03-03,08:15:30,Latte,four dollars,card"],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::DataQuality);
    assert!(matches!(
        error,
        ValidationError::NonNumeric { column: "money", line: 2, .. }
    ));

    Ok(())
}

#[test]
fn test_negative_money_is_an_implausible_amount() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &[
            "2025-03-03,08:15:30,Latte,4.75,card",
            "2025-03-04,09:00:00,Tea,-2.90,card",
        ],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::DataQuality);
    assert!(matches!(error, ValidationError::ImplausibleAmount { line: 3, .. }));

    Ok(())
}

#[test]
fn test_unparseable_date_is_a_data_quality_failure() -> Result<()> {
    let file = create_temporary_csv(
        HEADER,
        &["03/03/2025,08:15:30,Latte,4.75,card"],
    )?;

    let error = SchemaValidator::validate_file(file.path()).expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::DataQuality);
    assert!(matches!(error, ValidationError::InvalidDate { line: 2, .. }));

    Ok(())
}

#[test]
fn test_missing_file_is_a_structural_failure() {
    let error = SchemaValidator::validate_file(Path::new("no/such/dataset.csv"))
        .expect_err("validation should fail");

    assert_eq!(error.kind(), ErrorKind::Structural);
}
