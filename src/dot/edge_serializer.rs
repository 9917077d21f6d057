use crate::dot::statement::Statement;
use crate::graph::network_graph::NetworkGraph;

/// `"local" -> "remote"` for every flow, in insertion order.
pub fn build_edges(graph: &NetworkGraph) -> Vec<Statement> {
    graph
        .edges()
        .map(|edge| Statement::edge(edge.local.as_str(), edge.remote.as_str()))
        .collect()
}
