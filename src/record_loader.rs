//! Connection-table loading.
//!
//! Turns exported CSV snapshots into flat [`Record`]s, one per row.

pub mod loader;
pub mod types;

pub use loader::{load_records, read_file};
pub use types::Record;
