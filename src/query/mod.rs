//! Metadata API query execution
//!
//! Sends one GraphQL query to the metadata endpoint and hands the raw
//! response text to the flattener. The executor only guards the transport:
//! whether the body contains well-formed lineage data is the flattener's
//! concern.

mod executor;


pub use executor::QueryExecutor;

/// The fixed lineage query
///
/// Requests every published datasource with its certification flag and,
/// for each downstream flow, the flow name, owner name, and project name.
/// No variables and no pagination cursor; a single page is assumed to be
/// sufficient.
pub const LINEAGE_QUERY: &str = "\
query published_datasources_certified {
  publishedDatasources {
    name
    isCertified
    downstreamFlows {
      name,
      owner {
        name
      },
      projectName
    }
  }
}";
