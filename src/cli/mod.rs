mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;
use langcount_domain::config::ScanOptionsBuilder;
use langcount_ports::filesystem::ListingPlan;
use langcount_shared_kernel::{PresentationError, Result};
use log::debug;

use crate::config::RunConfig;

/// Upper bound accepted for `--jobs`.
const MAX_JOBS: usize = 512;

fn validate_jobs(flag: &str, jobs: usize) -> Result<()> {
    if jobs > MAX_JOBS {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: jobs.to_string(),
            reason: format!("must be at most {MAX_JOBS}"),
        }
        .into());
    }
    Ok(())
}

fn make_listing_plan(args: &Args) -> ListingPlan {
    ListingPlan {
        roots: args.paths.clone(),
        respect_gitignore: !args.no_gitignore,
        include_hidden: !args.no_hidden,
        follow_links: args.follow,
        max_depth: args.max_depth,
    }
}

/// Parse CLI arguments and materialise a [`RunConfig`].
///
/// # Errors
///
/// Returns `Err` when the parsed arguments are invalid.
pub fn load_config() -> Result<RunConfig> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
///
/// `--jobs 0` is accepted and runs with a single worker.
///
/// # Errors
///
/// Returns `Err` when `--jobs` is out of range or the scan options cannot
/// be built.
pub fn build_config(args: &Args) -> Result<RunConfig> {
    validate_jobs("--jobs", args.jobs)?;

    let options = ScanOptionsBuilder::default()
        .count_files_only(args.count_files)
        .record_unknown(args.unknown)
        .concurrency(args.jobs)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;
    debug!("scan options: {options:?}");

    Ok(RunConfig {
        listing: make_listing_plan(args),
        options,
        format: args.format.into(),
        languages: args.languages.clone(),
        list_languages: args.list_languages,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use langcount_shared_kernel::LangCountError;

    use super::*;
    use crate::presentation::OutputFormat;

    #[test]
    fn defaults_match_documented_behaviour() {
        let args = Args::parse_from(["langcount", "src"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.options.concurrency, 8);
        assert!(!config.options.count_files_only);
        assert!(!config.options.record_unknown);
        assert!(config.listing.respect_gitignore);
        assert!(config.listing.include_hidden);
        assert!(!config.listing.follow_links);
        assert_eq!(config.listing.roots, vec![PathBuf::from("src")]);
    }

    #[test]
    fn flags_map_onto_options_and_plan() {
        let args = Args::parse_from([
            "langcount",
            "-o",
            "json",
            "-j",
            "3",
            "--count-files",
            "--unknown",
            "--no-gitignore",
            "--no-hidden",
            "--follow",
            "--max-depth",
            "2",
            "a",
            "b",
        ]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.options.worker_count(), 3);
        assert!(config.options.count_files_only);
        assert!(config.options.record_unknown);
        assert!(!config.listing.respect_gitignore);
        assert!(!config.listing.include_hidden);
        assert!(config.listing.follow_links);
        assert_eq!(config.listing.max_depth, Some(2));
        assert_eq!(config.listing.roots.len(), 2);
    }

    #[test]
    fn zero_jobs_is_clamped_not_rejected() {
        let args = Args::parse_from(["langcount", "-j", "0", "."]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.options.worker_count(), 1);
    }

    #[test]
    fn too_many_jobs_is_rejected() {
        let args = Args::parse_from(["langcount", "-j", "600", "."]);
        let err = build_config(&args).unwrap_err();
        if let LangCountError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
            assert_eq!(flag, "--jobs");
            assert_eq!(value, "600");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }

    #[test]
    fn paths_required_unless_listing_languages() {
        assert!(Args::try_parse_from(["langcount"]).is_err());
        let args = Args::try_parse_from(["langcount", "--list-languages"]).expect("parses");
        assert!(build_config(&args).unwrap().list_languages);
    }
}
