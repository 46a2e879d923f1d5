use std::fs::metadata;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use moka::sync::Cache;
use tracing::debug;

use crate::pipeline::{Dataset, PipelineError};

#[derive(Clone)]
struct CachedDataset {
    modified: SystemTime,
    dataset: Arc<Dataset>
}

/// Explicit dataset cache for the presentation layer.
///
/// Keyed by path and guarded by the file's modification time: a load after
/// the source file has been replaced re-runs the validation gate and rebuilds
/// the dataset from scratch. Nothing here is process-global; the cache is an
/// owned value and dropping it drops every entry with it.
pub struct DatasetCache {
    entries: Cache<PathBuf, CachedDataset>
}

impl DatasetCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            entries: Cache::new(capacity)
        }
    }

    /// Returns the cached dataset when the file is unchanged on disk,
    /// otherwise validates and rebuilds it.
    pub fn load(&self, path: &Path) -> Result<Arc<Dataset>, PipelineError> {
        let modified = metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(|error| PipelineError::Validation(error.into()))?;

        if let Some(entry) = self.entries.get(path) {
            if entry.modified == modified {
                return Ok(entry.dataset);
            }

            debug!("Dataset at {} changed on disk, rebuilding", path.display());
        }

        let dataset = Arc::new(Dataset::load(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CachedDataset {
                modified,
                dataset: dataset.clone()
            }
        );

        Ok(dataset)
    }

    /// Drops the cached entry so the next load re-reads the file.
    pub fn invalidate(&self, path: &Path) {
        self.entries.invalidate(path);
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(16)
    }
}
