//! Lineage data types
//!
//! The `Published*`/`Downstream*` structs mirror the metadata API response
//! shape; [`LineageRow`] is the flattened output record.

use serde::{Deserialize, Serialize};

/// A published datasource node from the metadata response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedDatasource {
    /// Datasource name
    pub name: String,
    /// Certification flag; read from the response but not part of the
    /// flattened output (extension point, tolerated absent)
    #[serde(default)]
    pub is_certified: bool,
    /// Flows consuming this datasource
    pub downstream_flows: Vec<DownstreamFlow>,
}

/// A data-prep flow that consumes a published datasource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownstreamFlow {
    /// Flow name
    pub name: String,
    /// Flow owner
    pub owner: FlowOwner,
    /// Name of the project containing the flow
    pub project_name: String,
}

/// Owner of a flow
#[derive(Debug, Clone, Deserialize)]
pub struct FlowOwner {
    /// Owner display name
    pub name: String,
}

/// One flattened output record
///
/// One row per (datasource, flow) pair. Field order matches the declared
/// output schema: `ds_name, flow_name, owner_name, project_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageRow {
    /// Published datasource name
    pub ds_name: String,
    /// Downstream flow name
    pub flow_name: String,
    /// Flow owner name
    pub owner_name: String,
    /// Project containing the flow
    pub project_name: String,
}

impl LineageRow {
    /// Build a row from a datasource name and one of its flows
    pub fn from_pair(ds_name: &str, flow: &DownstreamFlow) -> Self {
        Self {
            ds_name: ds_name.to_string(),
            flow_name: flow.name.clone(),
            owner_name: flow.owner.name.clone(),
            project_name: flow.project_name.clone(),
        }
    }
}
