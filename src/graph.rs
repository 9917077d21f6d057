//! In-memory connection graph.
//!
//! Hosts and socket endpoints are nodes; every non-listening connection is an edge
//! between its local and remote endpoint.

pub mod builder;
pub mod network_graph;
pub mod types;

pub use builder::build_network;
pub use network_graph::NetworkGraph;
pub use types::{Connection, Edge, EndpointRole, Node, NodeKey};
