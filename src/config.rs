// src/config.rs
use std::path::PathBuf;

use langcount_domain::config::ScanOptions;
use langcount_ports::filesystem::ListingPlan;

use crate::presentation::OutputFormat;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub listing: ListingPlan,
    pub options: ScanOptions,
    pub format: OutputFormat,
    /// Override table layered over the embedded language profiles.
    pub languages: Option<PathBuf>,
    pub list_languages: bool,
}
