use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::{RawSale, RecordError, Sale};
use crate::validator::{RawTable, SchemaValidator, ValidationError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Record(#[from] RecordError)
}

/// An immutable, validated snapshot of the sales extract.
///
/// Built once per source file and shared read-only by every consumer.
/// Replacing the source file means building a fresh dataset; there is no
/// incremental update path.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    sales: Vec<Sale>
}

impl Dataset {
    /// Types every raw row, failing on the first malformed record.
    ///
    /// Either the whole table converts or the offending line is reported.
    /// Rows are never silently dropped.
    pub fn from_raw(rows: &[RawSale]) -> Result<Self, RecordError> {
        let mut sales = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            // header occupies line 1
            sales.push(Sale::from_raw(row, index as u64 + 2)?);
        }

        Ok(Self { sales })
    }

    /// Runs the validation gate against `path`, then builds the typed
    /// dataset from the same table.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let table = RawTable::read(path)?;
        SchemaValidator::validate_table(&table)?;

        let dataset = Self::from_raw(&table.rows)?;
        debug!("Loaded {} sales from {}", dataset.len(), path.display());

        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// A view over every record. Filters derive new views; the dataset
    /// itself is never mutated.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            sales: self.sales.iter().collect()
        }
    }
}

/// A borrowed, filtered selection of sales records.
///
/// Filter combinators return a fresh view each time, so dashboard widgets
/// can slice the same dataset independently within a session.
#[derive(Debug, Clone)]
pub struct DatasetView<'a> {
    sales: Vec<&'a Sale>
}

impl<'a> DatasetView<'a> {
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Sale> + '_ {
        self.sales.iter().copied()
    }

    fn retain(&self, keep: impl Fn(&Sale) -> bool) -> DatasetView<'a> {
        DatasetView {
            sales: self.sales.iter().copied().filter(|sale| keep(sale)).collect()
        }
    }

    /// Keeps sales whose date falls within `[start, end]`, inclusive.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> DatasetView<'a> {
        self.retain(|sale| {
            let date = sale.date();
            date >= start && date <= end
        })
    }

    pub fn with_products(&self, products: &[&str]) -> DatasetView<'a> {
        self.retain(|sale| products.contains(&sale.product.as_str()))
    }

    pub fn with_categories(&self, categories: &[&str]) -> DatasetView<'a> {
        self.retain(|sale| categories.contains(&sale.category))
    }

    pub fn with_regions(&self, regions: &[&str]) -> DatasetView<'a> {
        self.retain(|sale| regions.contains(&sale.region))
    }
}
