use log::{debug, info};

use crate::error_handling::types::GraphError;
use crate::graph::network_graph::NetworkGraph;
use crate::graph::types::{Connection, EndpointRole};
use crate::record_loader::types::Record;

/// Builds the graph in one left-to-right pass over `records`.
///
/// Each record yields its host node, a local endpoint carrying the record, a remote
/// endpoint and, unless the socket is listening, a flow edge between the two endpoints.
pub fn build_network(records: &[Record]) -> Result<NetworkGraph, GraphError> {
    info!("Building network graph from {} record(s)", records.len());
    let mut graph = NetworkGraph::new();

    for (i, record) in records.iter().enumerate() {
        let mut conn = Connection::from_record(record, i + 1)?;
        conn.normalize();
        debug!("{:?}", conn);

        graph.upsert_host(&conn.computer_name);

        let local = conn.local_key();
        let remote = conn.remote_key();
        graph.upsert_endpoint(&local, EndpointRole::Local(conn.clone()));
        graph.upsert_endpoint(&remote, EndpointRole::Remote);

        if conn.is_listening() {
            continue;
        }
        graph.add_edge(&local, &remote, conn);
    }

    info!(
        "Graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
