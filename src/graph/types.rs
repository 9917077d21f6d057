use crate::error_handling::types::GraphError;
use crate::record_loader::types::*;

/// Address a `ForeignAddress` is rewritten from when it points back at the host itself.
pub const LOOPBACK_ADDRESS: &str = "127.0.0.1";

/// Socket state of a listening endpoint. Such records produce no flow edge.
pub const LISTEN_STATE: &str = "LISTEN";

/// The nine required columns of a [`Record`], extracted once so the rest of the graph
/// code never deals with missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub computer_name: String,
    pub connection_type: String,
    pub local_address: String,
    pub local_port: String,
    pub foreign_address: String,
    pub foreign_port: String,
    pub state: String,
    pub process: String,
    pub ip_address: String,
}

impl Connection {
    /// `row` is only used to locate the record in the error message.
    pub fn from_record(record: &Record, row: usize) -> Result<Self, GraphError> {
        let field = |name: &'static str| {
            record
                .get(name)
                .map(str::to_string)
                .ok_or(GraphError::MissingField { field: name, row })
        };

        Ok(Self {
            computer_name: field(COMPUTER_NAME)?,
            connection_type: field(CONNECTION_TYPE)?,
            local_address: field(LOCAL_ADDRESS)?,
            local_port: field(LOCAL_PORT)?,
            foreign_address: field(FOREIGN_ADDRESS)?,
            foreign_port: field(FOREIGN_PORT)?,
            state: field(STATE)?,
            process: field(PROCESS)?,
            ip_address: field(IP_ADDRESS)?,
        })
    }

    /// Fills an empty local address and replaces a loopback foreign address with the
    /// host's own `IPAddress`.
    pub fn normalize(&mut self) {
        if self.local_address.is_empty() {
            self.local_address = self.ip_address.clone();
        }
        if self.foreign_address == LOOPBACK_ADDRESS {
            self.foreign_address = self.ip_address.clone();
        }
    }

    pub fn local_key(&self) -> String {
        endpoint_key(&self.connection_type, &self.local_address, &self.local_port)
    }

    pub fn remote_key(&self) -> String {
        endpoint_key(&self.connection_type, &self.foreign_address, &self.foreign_port)
    }

    pub fn is_listening(&self) -> bool {
        self.state == LISTEN_STATE
    }

    /// Label shown for the local endpoint inside its host block.
    pub fn local_label(&self) -> String {
        format!("{}_{}", self.local_port, self.process)
    }
}

/// `ConnectionType_Address_Port`, joined verbatim.
pub fn endpoint_key(connection_type: &str, address: &str, port: &str) -> String {
    format!("{}_{}_{}", connection_type, address, port)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Host(String),
    Endpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointRole {
    /// Socket owned by one of the loaded hosts, with the row it came from.
    Local(Connection),
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Host { name: String },
    Endpoint { key: String, role: EndpointRole },
}

impl Node {
    pub fn key(&self) -> NodeKey {
        match self {
            Node::Host { name } => NodeKey::Host(name.clone()),
            Node::Endpoint { key, .. } => NodeKey::Endpoint(key.clone()),
        }
    }

    /// The attached connection when this is a local endpoint.
    pub fn local_connection(&self) -> Option<&Connection> {
        match self {
            Node::Endpoint {
                role: EndpointRole::Local(conn),
                ..
            } => Some(conn),
            _ => None,
        }
    }
}

/// Active connection between a local and a remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub local: String,
    pub remote: String,
    pub connection: Connection,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(local_address: &str, foreign_address: &str) -> Record {
        [
            (COMPUTER_NAME, "HOST1"),
            (CONNECTION_TYPE, "TCP"),
            (LOCAL_ADDRESS, local_address),
            (LOCAL_PORT, "443"),
            (FOREIGN_ADDRESS, foreign_address),
            (FOREIGN_PORT, "51000"),
            (STATE, "ESTABLISHED"),
            (PROCESS, "chrome"),
            (IP_ADDRESS, "10.0.0.1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_keys_use_raw_values() {
        let conn = Connection::from_record(&record("10.0.0.1", "93.1.1.1"), 1).unwrap();
        assert_eq!(conn.local_key(), "TCP_10.0.0.1_443");
        assert_eq!(conn.remote_key(), "TCP_93.1.1.1_51000");
        assert_eq!(conn.local_label(), "443_chrome");
    }

    #[test]
    fn test_normalize_empty_local_address() {
        let mut conn = Connection::from_record(&record("", "93.1.1.1"), 1).unwrap();
        conn.normalize();
        assert_eq!(conn.local_key(), "TCP_10.0.0.1_443");
    }

    #[test]
    fn test_normalize_loopback_foreign_address() {
        let mut conn = Connection::from_record(&record("0.0.0.0", "127.0.0.1"), 1).unwrap();
        conn.normalize();
        assert_eq!(conn.local_key(), "TCP_0.0.0.0_443");
        assert_eq!(conn.remote_key(), "TCP_10.0.0.1_51000");
    }

    #[test]
    fn test_normalize_leaves_other_addresses_alone() {
        let mut conn = Connection::from_record(&record("10.0.0.5", "127.0.0.2"), 1).unwrap();
        conn.normalize();
        assert_eq!(conn.local_address, "10.0.0.5");
        assert_eq!(conn.foreign_address, "127.0.0.2");
    }

    #[test]
    fn test_from_record_reports_missing_field() {
        let mut rec = Record::new();
        rec.insert(COMPUTER_NAME, "HOST1");
        rec.insert(CONNECTION_TYPE, "TCP");
        assert_eq!(
            Connection::from_record(&rec, 12),
            Err(GraphError::MissingField {
                field: LOCAL_ADDRESS,
                row: 12
            })
        );
    }
}
