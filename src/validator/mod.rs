mod errors;
mod schema_validator;
#[cfg(test)]
mod tests;

pub use errors::{ErrorKind, NullBreakdown, NullViolation, ValidationError};
pub use schema_validator::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS, RawTable, REQUIRED_COLUMNS, SchemaValidator};
