use serde::Deserialize;

/// One row of the sales CSV exactly as it appears on disk.
///
/// Every field is optional so that blank cells and absent columns survive
/// ingestion long enough for the validator to report them precisely. The
/// `csv` crate maps empty (trimmed) cells to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSale {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Time", default)]
    pub time: Option<String>,
    #[serde(default)]
    pub hour_of_day: Option<String>,
    #[serde(default)]
    pub cash_type: Option<String>,
    #[serde(default)]
    pub coffee_name: Option<String>,
    #[serde(default)]
    pub money: Option<String>,
    #[serde(rename = "Time_of_Day", default)]
    pub time_of_day: Option<String>,
    #[serde(rename = "Weekday", default)]
    pub weekday: Option<String>,
    #[serde(rename = "Weekdaysort", default)]
    pub weekday_sort: Option<String>,
    #[serde(rename = "Month_name", default)]
    pub month_name: Option<String>,
    #[serde(rename = "Monthsort", default)]
    pub month_sort: Option<String>
}

impl RawSale {
    /// Looks up a cell by its CSV header name.
    ///
    /// Blank cells and unknown column names both come back as `None`, so a
    /// `Some` result is always a non-empty value.
    pub fn column(&self, name: &str) -> Option<&str> {
        let cell = match name {
            "Date" => &self.date,
            "Time" => &self.time,
            "hour_of_day" => &self.hour_of_day,
            "cash_type" => &self.cash_type,
            "coffee_name" => &self.coffee_name,
            "money" => &self.money,
            "Time_of_Day" => &self.time_of_day,
            "Weekday" => &self.weekday,
            "Weekdaysort" => &self.weekday_sort,
            "Month_name" => &self.month_name,
            "Monthsort" => &self.month_sort,
            _ => &None
        };

        cell.as_deref().filter(|value| !value.is_empty())
    }
}
