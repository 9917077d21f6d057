use indexmap::IndexMap;

use crate::graph::types::{Connection, Edge, EndpointRole, Node, NodeKey};

/// Owned, insertion-ordered graph of hosts, endpoints and flows.
///
/// Upserting a node keeps its original position and overwrites its attributes. Edges are
/// undirected: adding the same endpoint pair again, in either direction, replaces the
/// attached connection of the existing edge.
#[derive(Debug, Default)]
pub struct NetworkGraph {
    nodes: IndexMap<NodeKey, Node>,
    /// Keyed by the endpoint pair in sorted order.
    edges: IndexMap<(String, String), Edge>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_host(&mut self, name: &str) {
        self.upsert(Node::Host {
            name: name.to_string(),
        });
    }

    pub fn upsert_endpoint(&mut self, key: &str, role: EndpointRole) {
        self.upsert(Node::Endpoint {
            key: key.to_string(),
            role,
        });
    }

    fn upsert(&mut self, node: Node) {
        self.nodes.insert(node.key(), node);
    }

    pub fn add_edge(&mut self, local: &str, remote: &str, connection: Connection) {
        let pair = if local <= remote {
            (local.to_string(), remote.to_string())
        } else {
            (remote.to_string(), local.to_string())
        };

        match self.edges.get_mut(&pair) {
            Some(edge) => edge.connection = connection,
            None => {
                self.edges.insert(
                    pair,
                    Edge {
                        local: local.to_string(),
                        remote: remote.to_string(),
                        connection,
                    },
                );
            }
        }
    }

    pub fn get(&self, key: &NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Host names in insertion order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.nodes.values().filter_map(|node| match node {
            Node::Host { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Local endpoints whose connection belongs to `host`, in insertion order.
    pub fn local_endpoints_of<'a>(
        &'a self,
        host: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Connection)> + 'a {
        self.nodes.values().filter_map(move |node| match node {
            Node::Endpoint {
                key,
                role: EndpointRole::Local(conn),
            } if conn.computer_name == host => Some((key.as_str(), conn)),
            _ => None,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(host: &str, port: &str, state: &str) -> Connection {
        Connection {
            computer_name: host.into(),
            connection_type: "TCP".into(),
            local_address: "10.0.0.1".into(),
            local_port: port.into(),
            foreign_address: "93.1.1.1".into(),
            foreign_port: "51000".into(),
            state: state.into(),
            process: "svc".into(),
            ip_address: "10.0.0.1".into(),
        }
    }

    #[test]
    fn test_upsert_keeps_position_and_overwrites() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("H");
        graph.upsert_endpoint("TCP_a_1", EndpointRole::Remote);
        graph.upsert_endpoint("TCP_b_2", EndpointRole::Remote);
        graph.upsert_endpoint("TCP_a_1", EndpointRole::Local(conn("H", "1", "LISTEN")));

        assert_eq!(graph.node_count(), 3);
        let keys: Vec<_> = graph.nodes().map(Node::key).collect();
        assert_eq!(
            keys,
            vec![
                NodeKey::Host("H".into()),
                NodeKey::Endpoint("TCP_a_1".into()),
                NodeKey::Endpoint("TCP_b_2".into()),
            ]
        );
        let node = graph.get(&NodeKey::Endpoint("TCP_a_1".into())).unwrap();
        assert_eq!(node.local_connection().unwrap().state, "LISTEN");
    }

    #[test]
    fn test_host_and_endpoint_with_same_name_do_not_collide() {
        let mut graph = NetworkGraph::new();
        graph.upsert_host("same");
        graph.upsert_endpoint("same", EndpointRole::Remote);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.hosts().collect::<Vec<_>>(), vec!["same"]);
    }

    #[test]
    fn test_edges_are_undirected_and_deduplicated() {
        let mut graph = NetworkGraph::new();
        graph.add_edge("l", "r", conn("H", "1", "ESTABLISHED"));
        graph.add_edge("x", "y", conn("H", "2", "ESTABLISHED"));
        graph.add_edge("r", "l", conn("H", "3", "TIME_WAIT"));

        assert_eq!(graph.edge_count(), 2);
        let first = graph.edges().next().unwrap();
        assert_eq!((first.local.as_str(), first.remote.as_str()), ("l", "r"));
        assert_eq!(first.connection.state, "TIME_WAIT");
    }

    #[test]
    fn test_local_endpoints_filtered_by_host() {
        let mut graph = NetworkGraph::new();
        graph.upsert_endpoint("a", EndpointRole::Local(conn("H1", "1", "LISTEN")));
        graph.upsert_endpoint("b", EndpointRole::Local(conn("H2", "2", "LISTEN")));
        graph.upsert_endpoint("c", EndpointRole::Remote);
        graph.upsert_endpoint("d", EndpointRole::Local(conn("H1", "4", "LISTEN")));

        let keys: Vec<_> = graph.local_endpoints_of("H1").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "d"]);
    }
}
