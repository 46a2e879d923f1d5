use std::path::Path;
use std::process::Command;

use anyhow::Result;

fn run_gate(fixture: &str) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_sales-reporting-engine");
    let fixture_path = Path::new("samples").join(fixture);

    Ok(Command::new(binary_path).arg(fixture_path).output()?)
}

#[test]
fn test_cli_prints_a_full_report_for_a_clean_dataset() -> Result<()> {
    let output = run_gate("sample.csv")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Loaded 6 rows"));
    assert!(stdout.contains("money: min=12.35 max=38.70 mean=22.06"));
    assert!(stdout.contains("hour_of_day: min=7 max=19"));
    assert!(stdout.contains("Calendar coverage: 2025-03-03 -> 2025-03-09 (6 days)"));
    assert!(stdout.contains("card: 6"));
    assert!(stdout.contains("Latte: 1"));

    Ok(())
}

#[test]
fn test_cli_exits_non_zero_when_a_required_column_is_missing() -> Result<()> {
    let output = run_gate("missing_money.csv")?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("money"));

    Ok(())
}

#[test]
fn test_cli_locates_the_offending_cell_for_a_blank_date() -> Result<()> {
    let output = run_gate("blank_date.csv")?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Date"));
    assert!(stderr.contains("line 4"));

    Ok(())
}

#[test]
fn test_cli_reports_a_missing_file_as_unreadable() -> Result<()> {
    let output = run_gate("does_not_exist.csv")?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unable to read the dataset"));

    Ok(())
}
