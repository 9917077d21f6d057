use log::{debug, info};
use crate::configuration::config::{Config, Settings};
use crate::dot;
use crate::error_handling::types::*;
use crate::graph::builder::build_network;
use crate::record_loader::loader::load_records;
use crate::render::html::{render_page, Page};

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No input files were given; the caller prints usage and exits successfully.
    Usage,
    /// The finished HTML document.
    Rendered(String),
}

pub struct Controller {
    pub settings: Settings,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, RunError> {
        debug!("Resolving configuration");
        let settings = config.resolve()?;
        Ok(Self { settings })
    }

    /// Loads every input file, builds the graph and renders the page.
    ///
    /// Nothing is produced unless every phase succeeds.
    pub fn run(&self) -> Result<RunOutcome, RunError> {
        if self.settings.files.is_empty() {
            info!("No files found");
            return Ok(RunOutcome::Usage);
        }

        info!("Loading records");
        let records = load_records(&self.settings.files)?;

        let graph = build_network(&records)?;
        let desc = dot::describe(&graph);
        debug!("Graph description has {} statement(s)", desc.len());

        let html = render_page(&desc, &Page::from(&self.settings))?;
        Ok(RunOutcome::Rendered(html))
    }
}
