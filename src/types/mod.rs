mod season;
mod time_bucket;

pub use season::Season;
pub use time_bucket::TimeBucket;

/// 1-based line number within the source CSV file. The header row is line 1,
/// so the first data row is line 2.
pub type LineNumber = u64;
