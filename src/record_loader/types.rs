use std::collections::HashMap;

/// Column names every connection-table export must carry.
pub const COMPUTER_NAME: &str = "ComputerName";
pub const CONNECTION_TYPE: &str = "ConnectionType";
pub const LOCAL_ADDRESS: &str = "LocalAddress";
pub const LOCAL_PORT: &str = "LocalPort";
pub const FOREIGN_ADDRESS: &str = "ForeignAddress";
pub const FOREIGN_PORT: &str = "ForeignPort";
pub const STATE: &str = "State";
pub const PROCESS: &str = "Process";
pub const IP_ADDRESS: &str = "IPAddress";

/// One parsed row of a connection table, keyed by header name.
///
/// Values are kept as raw strings, ports included, so every later comparison is
/// string-exact. Columns beyond the required ones are preserved untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
