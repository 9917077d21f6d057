//! Graph description text.
//!
//! Host blocks come first, followed by one statement per flow edge.

pub mod cluster_serializer;
pub mod edge_serializer;
pub mod statement;

use log::info;

use crate::graph::network_graph::NetworkGraph;

pub use cluster_serializer::{build_cluster, build_clusters};
pub use edge_serializer::build_edges;
pub use statement::{Attr, GraphDescription, Statement};

pub fn describe(graph: &NetworkGraph) -> GraphDescription {
    info!("Serializing graph description");
    let mut desc = GraphDescription::new();
    desc.extend(build_clusters(graph));
    desc.extend(build_edges(graph));
    desc
}
