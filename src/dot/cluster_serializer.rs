use log::debug;

use crate::dot::statement::{Attr, Statement};
use crate::graph::network_graph::NetworkGraph;

/// One `cluster_<host>` subgraph per host, in host insertion order.
pub fn build_clusters(graph: &NetworkGraph) -> Vec<Statement> {
    graph.hosts().map(|host| build_cluster(graph, host)).collect()
}

/// Id of the invisible node that keeps a host block anchored during layout.
pub fn anchor_id(host: &str) -> String {
    format!("cluster_{}_anchor", host)
}

/// Host block holding the host's local endpoints. Listening sockets are drawn blue.
///
/// Every local endpoint is chained, in graph order, into one invisible edge ending at
/// the anchor so that the block lays out as a single column.
pub fn build_cluster(graph: &NetworkGraph, host: &str) -> Statement {
    let anchor = anchor_id(host);
    let mut body = vec![
        Statement::GraphAttr(Attr::keyword("style", "filled")),
        Statement::GraphAttr(Attr::keyword("color", "lightgrey")),
        Statement::NodeDefaults(vec![
            Attr::keyword("style", "filled"),
            Attr::keyword("color", "white"),
        ]),
        Statement::GraphAttr(Attr::text("label", host)),
        Statement::node(anchor.as_str(), vec![Attr::keyword("style", "invis")]),
    ];

    let mut chain = Vec::new();
    for (key, conn) in graph.local_endpoints_of(host) {
        let mut attrs = vec![Attr::text("label", conn.local_label())];
        if conn.is_listening() {
            attrs.push(Attr::keyword("color", "blue"));
        }
        body.push(Statement::node(key, attrs));
        chain.push(key.to_string());
    }

    debug!("Cluster {} holds {} local endpoint(s)", host, chain.len());
    if !chain.is_empty() {
        chain.push(anchor);
        body.push(Statement::Edge {
            chain,
            attrs: vec![Attr::keyword("style", "invis")],
        });
    }

    Statement::Subgraph {
        id: format!("cluster_{}", host),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::statement::GraphDescription;
    use crate::graph::types::{Connection, EndpointRole};

    fn conn(host: &str, port: &str, state: &str, process: &str) -> Connection {
        Connection {
            computer_name: host.into(),
            connection_type: "TCP".into(),
            local_address: "10.0.0.1".into(),
            local_port: port.into(),
            foreign_address: "93.1.1.1".into(),
            foreign_port: "51000".into(),
            state: state.into(),
            process: process.into(),
            ip_address: "10.0.0.1".into(),
        }
    }

    fn render(statement: Statement) -> String {
        let mut desc = GraphDescription::new();
        desc.push(statement);
        desc.to_string()
    }

    #[test]
    fn test_cluster_lists_local_endpoints_and_anchor_chain() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("HOST1");
        graph.upsert_endpoint("TCP_10.0.0.1_22", EndpointRole::Local(conn("HOST1", "22", "LISTEN", "sshd")));
        graph.upsert_endpoint("TCP_93.1.1.1_51000", EndpointRole::Remote);
        graph.upsert_endpoint(
            "TCP_10.0.0.1_443",
            EndpointRole::Local(conn("HOST1", "443", "ESTABLISHED", "chrome")),
        );

        let text = render(build_cluster(&graph, "HOST1"));

        assert!(text.starts_with("  subgraph \"cluster_HOST1\" {\n"));
        assert!(text.contains("label=\"HOST1\";"));
        assert!(text.contains("node [style=filled, color=white];"));
        assert!(text.contains("\"cluster_HOST1_anchor\" [style=invis];"));
        assert!(text.contains("\"TCP_10.0.0.1_22\" [label=\"22_sshd\", color=blue];"));
        assert!(text.contains("\"TCP_10.0.0.1_443\" [label=\"443_chrome\"];"));
        assert!(text.contains(
            "\"TCP_10.0.0.1_22\" -> \"TCP_10.0.0.1_443\" -> \"cluster_HOST1_anchor\" [style=invis];"
        ));
        assert!(!text.contains("TCP_93.1.1.1_51000"));
    }

    #[test]
    fn test_cluster_keeps_insertion_order_not_port_order() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("H");
        graph.upsert_endpoint("TCP_1.1.1.1_8080", EndpointRole::Local(conn("H", "8080", "ESTABLISHED", "z")));
        graph.upsert_endpoint("TCP_1.1.1.1_22", EndpointRole::Local(conn("H", "22", "LISTEN", "a")));

        let text = render(build_cluster(&graph, "H"));

        let first = text.find("\"TCP_1.1.1.1_8080\" [label=\"8080_z\"];").unwrap();
        let second = text.find("\"TCP_1.1.1.1_22\" [label=\"22_a\", color=blue];").unwrap();
        assert!(first < second);
        assert!(text.contains(
            "\"TCP_1.1.1.1_8080\" -> \"TCP_1.1.1.1_22\" -> \"cluster_H_anchor\" [style=invis];"
        ));
    }

    #[test]
    fn test_cluster_only_takes_its_own_host() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("A");
        graph.upsert_host("B");
        graph.upsert_endpoint("TCP_1_1", EndpointRole::Local(conn("A", "1", "ESTABLISHED", "a")));
        graph.upsert_endpoint("TCP_2_2", EndpointRole::Local(conn("B", "2", "ESTABLISHED", "b")));

        let clusters = build_clusters(&graph);
        assert_eq!(clusters.len(), 2);

        let a = render(clusters[0].clone());
        let b = render(clusters[1].clone());
        assert!(a.contains("\"TCP_1_1\"") && !a.contains("\"TCP_2_2\""));
        assert!(b.contains("\"TCP_2_2\"") && !b.contains("\"TCP_1_1\""));
    }

    #[test]
    fn test_cluster_without_local_endpoints_keeps_bare_anchor() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("EMPTY");

        let text = render(build_cluster(&graph, "EMPTY"));
        assert!(text.contains("\"cluster_EMPTY_anchor\" [style=invis];"));
        assert!(!text.contains("->"));
    }
}
