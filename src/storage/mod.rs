mod dataset_cache;
#[cfg(test)]
mod tests;

pub use dataset_cache::DatasetCache;
