//! Lineage response parsing and flattening
//!
//! Turns the nested metadata response (datasources → downstream flows →
//! owners/projects) into a flat, ordered list of [`LineageRow`]s.

mod flattener;
mod types;


pub use flattener::flatten;
pub use types::{DownstreamFlow, FlowOwner, LineageRow, PublishedDatasource};
