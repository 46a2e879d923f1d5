use super::DatasetCache;

use std::fs;
use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

const HEADER: &str = "Date,Time,coffee_name,money,cash_type";

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;

    Ok(file)
}

fn rewrite_csv(file: &NamedTempFile, rows: &[&str]) -> Result<()> {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(file.path(), content)?;

    // make the mtime change visible even on coarse-grained filesystems
    let handle = fs::File::options().write(true).open(file.path())?;
    handle.set_modified(SystemTime::now() + Duration::from_secs(2))?;

    Ok(())
}

#[test]
fn test_cache_returns_the_same_snapshot_for_an_unchanged_file() -> Result<()> {
    let file = create_temporary_csv(&["2025-03-03,08:15:30,Latte,18.12,card"])?;
    let cache = DatasetCache::default();

    let first = cache.load(file.path())?;
    let second = cache.load(file.path())?;

    assert!(Arc::ptr_eq(&first, &second));

    Ok(())
}

#[test]
fn test_cache_rebuilds_when_the_file_is_replaced() -> Result<()> {
    let file = create_temporary_csv(&["2025-03-03,08:15:30,Latte,18.12,card"])?;
    let cache = DatasetCache::default();

    let before = cache.load(file.path())?;
    assert_eq!(before.view().total_revenue(), Decimal::from_str("18.12")?);

    rewrite_csv(
        &file,
        &[
            "2025-03-03,08:15:30,Latte,18.12,card",
            "2025-03-04,09:00:00,Tea,2.90,card",
        ],
    )?;

    let after = cache.load(file.path())?;

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 2);
    assert_eq!(after.view().total_revenue(), Decimal::from_str("21.02")?);

    Ok(())
}

#[test]
fn test_explicit_invalidation_forces_a_reload() -> Result<()> {
    let file = create_temporary_csv(&["2025-03-03,08:15:30,Latte,18.12,card"])?;
    let cache = DatasetCache::default();

    let first = cache.load(file.path())?;
    cache.invalidate(file.path());
    let second = cache.load(file.path())?;

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.as_ref(), second.as_ref());

    Ok(())
}

#[test]
fn test_cache_propagates_gate_failures() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "Date,Time,coffee_name,cash_type")?;
    writeln!(file, "2025-03-03,08:15:30,Latte,card")?;

    let cache = DatasetCache::default();
    let error = cache.load(file.path()).expect_err("load should fail");

    assert!(error.to_string().contains("money"));

    Ok(())
}
