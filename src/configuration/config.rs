use super::types::*;
use crate::error_handling::types::ConfigError;
use clap::{CommandFactory, Parser};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line surface of the tool.
///
/// Only the input files are positional; everything else tunes the generated page. A
/// setting given on the command line wins over the same setting in the `--config` file,
/// which in turn wins over the built-in default.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use netviz::configuration::config::Config;
///
/// let config = Config::parse_from(["netviz", "hostA.csv", "hostB.csv"]);
/// assert_eq!(config.files.len(), 2);
/// ```
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "netviz")]
#[command(version)]
#[command(about = "Render exported connection tables as a host/socket graph")]
pub struct Config {
    /// Connection-table CSV exports to read, in order
    pub files: Vec<PathBuf>,

    /// TOML file with page and renderer settings
    ///
    /// # Command Line
    /// Use `--config <PATH>` or the `NETVIZ_CONFIG` environment variable
    #[arg(long, env = "NETVIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the HTML document to this file instead of standard output
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Script source of the rendering library
    #[arg(long, env = "NETVIZ_VIZ_SCRIPT")]
    pub viz_script: Option<String>,

    /// Title of the generated page
    #[arg(long)]
    pub title: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: String,
    pub viz_script: String,
    pub render: RenderOptions,
}

impl Config {
    pub fn from_args() -> Self {
        Config::parse()
    }

    /// One-line usage shown when the tool is started without input files.
    pub fn usage() -> String {
        Config::command().render_usage().to_string()
    }

    /// Reads the TOML configuration file.
    pub fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
        info!("Configuration imported from {}", path.display());
        Ok(file_config)
    }

    /// Merges command line, configuration file and defaults.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let file_config = match &self.config {
            Some(path) => Config::read_file_config(path)?,
            None => FileConfig::default(),
        };

        let render = file_config.render;
        if render.scale.is_nan() || render.scale <= 0.0 {
            return Err(ConfigError::NotInRange(format!(
                "render.scale must be positive, got {}",
                render.scale
            )));
        }
        if render.total_memory == 0 {
            return Err(ConfigError::NotInRange(String::from(
                "render.total_memory must be greater than zero",
            )));
        }

        Ok(Settings {
            files: self.files,
            output: self.output,
            title: self
                .title
                .or(file_config.title)
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            viz_script: self
                .viz_script
                .or(file_config.viz_script)
                .unwrap_or_else(|| DEFAULT_VIZ_SCRIPT.to_string()),
            render,
        })
    }
}
