mod errors;
mod raw;
mod reference;
mod report;
mod sale;

pub use errors::RecordError;
pub use raw::RawSale;
pub use reference::{margin_rate, month_abbrev, product_category, region_for_store, store_for_weekday};
pub use report::{DateSpan, NumericSummary, ValidationReport};
pub use sale::Sale;
