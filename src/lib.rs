//! Validation gate and feature pipeline for a coffee-sales CSV extract.
//!
//! The crate has two collaborating cores: [`validator::SchemaValidator`], a
//! fail-fast data-quality gate that turns a CSV file into a
//! [`models::ValidationReport`], and [`pipeline::Dataset`], the typed,
//! immutable snapshot whose filtered views feed every downstream aggregate.
//! [`storage::DatasetCache`] sits in front of both for presentation layers
//! that reload only when the source file changes.

pub mod models;
pub mod pipeline;
pub mod storage;
pub mod types;
pub mod validator;
