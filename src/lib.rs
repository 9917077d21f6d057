pub mod configuration;
pub use configuration::{Config, Settings};

pub mod controller;
pub use controller::{Controller, RunOutcome};

pub mod dot;

pub mod error_handling;
pub use error_handling::RunError;

pub mod graph;

pub mod record_loader;

pub mod render;
