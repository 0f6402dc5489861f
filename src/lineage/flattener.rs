//! Response flattening
//!
//! Pure function of the raw response text: parsing the same text twice
//! yields identical row sequences.

use super::types::{LineageRow, PublishedDatasource};
use crate::error::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// JSON path to the datasource array in a well-formed response
const DATASOURCES_PATH: &str = "data.publishedDatasources";

/// Flatten a raw metadata response into lineage rows
///
/// Fails with a parse error when the text is not valid JSON, and with a
/// schema error when `data.publishedDatasources` is absent or the nodes
/// under it do not match the expected shape. A GraphQL errors-only response
/// has no `data` key and therefore surfaces as the same schema error.
///
/// Row order follows source order: datasources in response order, each
/// datasource's flows in response order. A datasource with no downstream
/// flows contributes no rows.
pub fn flatten(raw: &str) -> Result<Vec<LineageRow>> {
    let response: Value = serde_json::from_str(raw)?;

    let datasources = response
        .pointer("/data/publishedDatasources")
        .ok_or_else(|| Error::schema(DATASOURCES_PATH, "key not found"))?;

    let datasources: Vec<PublishedDatasource> = serde_json::from_value(datasources.clone())
        .map_err(|e| Error::schema(DATASOURCES_PATH, e.to_string()))?;

    debug!("Parsed {} published datasources", datasources.len());

    let rows: Vec<LineageRow> = datasources
        .iter()
        .flat_map(|ds| {
            ds.downstream_flows
                .iter()
                .map(|flow| LineageRow::from_pair(&ds.name, flow))
        })
        .collect();

    debug!("Flattened into {} lineage rows", rows.len());

    Ok(rows)
}
