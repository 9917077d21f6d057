use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Netstat Viz";
pub const DEFAULT_VIZ_SCRIPT: &str = "./viz.js";

/// Options handed to the browser-side `Viz(src, options)` call.
///
/// Read from the `[render]` table of the configuration file with snake_case keys and
/// serialized for the page with the camelCase names the library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub format: String,
    pub engine: String,
    pub scale: f64,
    #[serde(rename(serialize = "totalMemory"))]
    pub total_memory: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: String::from("svg"),
            engine: String::from("dot"),
            scale: 1.0,
            total_memory: 33_554_432,
        }
    }
}

/// Layout of the optional TOML configuration file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub title: Option<String>,
    pub viz_script: Option<String>,
    pub render: RenderOptions,
}
