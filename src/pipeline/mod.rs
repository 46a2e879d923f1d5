mod aggregate;
mod dataset;

pub use aggregate::{ProductMix, ProductProfitability, RegionalPerformance, StoreRevenue};
pub use dataset::{Dataset, DatasetView, PipelineError};
