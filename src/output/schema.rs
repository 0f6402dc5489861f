//! Output schema declaration and batch construction
//!
//! The schema is declared statically so the host can inspect it before any
//! data is produced; batches built from rows use the same declaration, which
//! keeps the two structurally identical by construction.

use crate::error::Result;
use crate::lineage::LineageRow;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Output column names, in declared order
pub const COLUMNS: [&str; 4] = ["ds_name", "flow_name", "owner_name", "project_name"];

/// The declared output schema: four non-nullable string columns
pub fn output_schema() -> SchemaRef {
    let fields: Vec<Field> = COLUMNS
        .iter()
        .map(|name| Field::new(*name, DataType::Utf8, false))
        .collect();
    Arc::new(Schema::new(fields))
}

/// An empty batch carrying the declared schema (zero rows)
pub fn empty_batch() -> RecordBatch {
    RecordBatch::new_empty(output_schema())
}

/// Convert lineage rows into a RecordBatch with the declared schema
///
/// Column order matches [`COLUMNS`] for any row count, including zero.
pub fn rows_to_batch(rows: &[LineageRow]) -> Result<RecordBatch> {
    let ds_names: StringArray = rows.iter().map(|r| Some(r.ds_name.as_str())).collect();
    let flow_names: StringArray = rows.iter().map(|r| Some(r.flow_name.as_str())).collect();
    let owner_names: StringArray = rows.iter().map(|r| Some(r.owner_name.as_str())).collect();
    let project_names: StringArray = rows.iter().map(|r| Some(r.project_name.as_str())).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(ds_names),
        Arc::new(flow_names),
        Arc::new(owner_names),
        Arc::new(project_names),
    ];

    let batch = RecordBatch::try_new(output_schema(), columns)?;
    Ok(batch)
}
