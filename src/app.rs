// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use langcount_infra::{FsFileScanner, LoggingObserver, ProfileCatalog, WalkFileLister};
use langcount_ports::catalog::LanguageCatalog;
use langcount_usecase::{Aggregator, CountLanguages};
use log::info;

use crate::{cli, config::RunConfig, presentation};

/// Parses the command line and runs one invocation against stdout.
///
/// # Errors
///
/// Configuration problems, no input files, or an output failure.
pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Runs `config`, writing the rendered result to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let catalog = ProfileCatalog::load(config.languages.as_deref())
        .context("failed to load language profiles")?;

    if config.list_languages {
        presentation::write_language_list(&catalog.language_names(), out)?;
        return Ok(());
    }

    info!(
        "langcount v{} · parallel={}",
        crate::VERSION,
        config.options.worker_count()
    );

    let scanner = FsFileScanner::new();
    let observer = LoggingObserver;
    let lister = WalkFileLister::new();
    let aggregator =
        Aggregator::new(&catalog, &scanner, config.options.clone()).with_observer(&observer);

    let summary = CountLanguages::new(&lister, aggregator).run(&config.listing)?;
    presentation::render(&summary, config.format, out)?;
    Ok(())
}
