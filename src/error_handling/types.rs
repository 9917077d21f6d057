use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    NotInRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: csv::Error },
    NoInputFiles,
    NoRecords,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "Unable to open {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "Unable to parse {}: {}", path.display(), source)
            }
            LoadError::NoInputFiles => write!(f, "No input files given"),
            LoadError::NoRecords => write!(f, "No flows found in any input file"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, PartialEq)]
pub enum GraphError {
    /// `row` is the 1-based position of the record across all loaded files.
    MissingField { field: &'static str, row: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::MissingField { field, row } => {
                write!(f, "Record {} has no `{}` field", row, field)
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[derive(Debug)]
pub enum RenderError {
    TemplateMissing(String),
    TemplateEncoding(String),
    Serialize(String),
    IoError(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateMissing(e) => write!(f, "HTML template not found: {}", e),
            RenderError::TemplateEncoding(e) => write!(f, "HTML template is not UTF-8: {}", e),
            RenderError::Serialize(e) => write!(f, "Render options serialization error: {}", e),
            RenderError::IoError(e) => write!(f, "Output IO error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialize(err.to_string())
    }
}

#[derive(Debug)]
pub enum RunError {
    ConfigurationError(ConfigError),
    LoadError(LoadError),
    GraphError(GraphError),
    RenderError(RenderError),
}

impl RunError {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::LoadError(LoadError::NoRecords) => 2,
            RunError::GraphError(_) => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            RunError::LoadError(e) => write!(f, "Load error: {}", e),
            RunError::GraphError(e) => write!(f, "Graph error: {}", e),
            RunError::RenderError(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(err: ConfigError) -> Self {
        RunError::ConfigurationError(err)
    }
}

impl From<LoadError> for RunError {
    fn from(err: LoadError) -> Self {
        RunError::LoadError(err)
    }
}

impl From<GraphError> for RunError {
    fn from(err: GraphError) -> Self {
        RunError::GraphError(err)
    }
}

impl From<RenderError> for RunError {
    fn from(err: RenderError) -> Self {
        RunError::RenderError(err)
    }
}
