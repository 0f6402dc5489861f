//! Arrow output
//!
//! Declares the fixed four-column output schema and converts flattened
//! lineage rows into RecordBatches that conform to it.

mod schema;


pub use schema::{empty_batch, output_schema, rows_to_batch, COLUMNS};
