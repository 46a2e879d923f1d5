use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::models::errors::RecordError;
use crate::models::raw::RawSale;
use crate::models::reference;
use crate::types::{LineNumber, Season, TimeBucket};

/// A fully typed, reporting-ready sales record.
///
/// Produced by a single parse-and-validate step so type errors surface at the
/// ingestion boundary instead of inside aggregation code. Derived fields
/// (bucket, weekday, store, season, margin) are computed here and never read
/// back from the CSV; precomputed copies in the file are cross-checked
/// against the derivation and rejected on disagreement.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Calendar date plus time of day, sub-second capable, timezone-naive.
    pub timestamp: NaiveDateTime,
    /// Hour component of `timestamp` (0-23).
    pub hour_of_day: u8,
    /// Open categorical set; a dataset with one payment method is valid.
    pub payment_method: Option<String>,
    pub product: String,
    pub amount: Decimal,
    pub bucket: TimeBucket,
    pub weekday: Weekday,
    pub month_name: &'static str,
    pub category: &'static str,
    pub store: &'static str,
    pub region: &'static str,
    pub season: Season,
    /// Gross margin value: `amount` times the category margin rate.
    pub margin: Decimal
}

impl Sale {
    /// Types one raw row, deriving every reporting field.
    ///
    /// `line` is the row's 1-based line number in the source file and is
    /// carried into every diagnostic.
    ///
    /// # Errors
    /// Returns `RecordError` if a required field is empty, a value fails to
    /// parse, the amount is negative, or a precomputed column disagrees with
    /// its derivation. The validation gate should catch all of these first;
    /// this is the loud failure behind it, never a silent row drop.
    pub fn from_raw(raw: &RawSale, line: LineNumber) -> Result<Self, RecordError> {
        let date = parse_date(raw, line)?;
        let time = parse_time(raw, line)?;
        let timestamp = NaiveDateTime::new(date, time);
        let timestamp_hour = timestamp.hour() as u8;

        let hour_of_day = match raw.column("hour_of_day") {
            Some(value) => {
                let hour: u8 = value
                    .parse()
                    .map_err(|_| RecordError::invalid_value("hour_of_day", line, value, "hour (0-23)"))?;

                if hour != timestamp_hour {
                    return Err(RecordError::HourMismatch { line, hour, timestamp_hour });
                }

                hour
            }
            None => timestamp_hour
        };

        let product = raw
            .column("coffee_name")
            .ok_or_else(|| RecordError::missing_field("coffee_name", line))?
            .to_string();

        let amount = parse_amount(raw, line)?;

        let bucket = TimeBucket::from_hour(hour_of_day)
            .ok_or_else(|| RecordError::invalid_value("hour_of_day", line, &hour_of_day.to_string(), "hour (0-23)"))?;
        let weekday = timestamp.weekday();
        let month_name = reference::month_abbrev(date.month())
            .ok_or_else(|| RecordError::invalid_value("Date", line, &date.to_string(), "calendar month"))?;
        let season = Season::from_month(date.month())
            .ok_or_else(|| RecordError::invalid_value("Date", line, &date.to_string(), "calendar month"))?;

        check_precomputed(raw, "Time_of_Day", line, &bucket.to_string())?;
        check_precomputed(raw, "Weekday", line, &weekday.to_string())?;
        check_precomputed(raw, "Weekdaysort", line, &weekday.number_from_monday().to_string())?;
        check_precomputed(raw, "Month_name", line, month_name)?;
        check_precomputed(raw, "Monthsort", line, &date.month().to_string())?;

        let category = reference::product_category(&product);
        let store = reference::store_for_weekday(weekday);
        let region = reference::region_for_store(store);
        let margin = amount
            .checked_mul(reference::margin_rate(category))
            .ok_or(RecordError::MarginOverflow { line })?;

        Ok(Self {
            timestamp,
            hour_of_day,
            payment_method: raw.column("cash_type").map(str::to_string),
            product,
            amount,
            bucket,
            weekday,
            month_name,
            category,
            store,
            region,
            season,
            margin
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// ISO weekday sort key: Monday=1 through Sunday=7. Always agrees with
    /// `weekday` because both come from the same derivation.
    pub fn weekday_sort(&self) -> u8 {
        self.weekday.number_from_monday() as u8
    }

    /// Calendar month sort key: January=1 through December=12.
    pub fn month_sort(&self) -> u8 {
        self.date().month() as u8
    }
}

fn parse_date(raw: &RawSale, line: LineNumber) -> Result<NaiveDate, RecordError> {
    let value = raw
        .column("Date")
        .ok_or_else(|| RecordError::missing_field("Date", line))?;

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RecordError::invalid_value("Date", line, value, "ISO calendar date"))
}

fn parse_time(raw: &RawSale, line: LineNumber) -> Result<NaiveTime, RecordError> {
    let value = raw
        .column("Time")
        .ok_or_else(|| RecordError::missing_field("Time", line))?;

    // %.f keeps the fractional seconds optional
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .map_err(|_| RecordError::invalid_value("Time", line, value, "time of day"))
}

fn parse_amount(raw: &RawSale, line: LineNumber) -> Result<Decimal, RecordError> {
    let value = raw
        .column("money")
        .ok_or_else(|| RecordError::missing_field("money", line))?;

    let amount = Decimal::from_str(value)
        .map_err(|_| RecordError::invalid_value("money", line, value, "decimal amount"))?;

    if amount < Decimal::ZERO {
        return Err(RecordError::NegativeAmount { line, amount });
    }

    Ok(amount)
}

fn check_precomputed(raw: &RawSale, column: &'static str, line: LineNumber, expected: &str) -> Result<(), RecordError> {
    match raw.column(column) {
        Some(found) if found != expected => Err(RecordError::derived_mismatch(column, line, found, expected)),
        _ => Ok(())
    }
}
