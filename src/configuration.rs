pub mod config;
pub mod types;

pub use config::{Config, Settings};
pub use types::RenderOptions;
