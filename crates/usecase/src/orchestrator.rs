// crates/usecase/src/orchestrator.rs
use langcount_domain::analytics::Summary;
use langcount_ports::filesystem::{FileLister, ListingPlan};
use langcount_shared_kernel::{ApplicationError, Result};
use log::info;

use crate::aggregator::Aggregator;

pub struct CountLanguages<'a> {
    lister: &'a dyn FileLister,
    aggregator: Aggregator<'a>,
}

impl<'a> CountLanguages<'a> {
    pub fn new(lister: &'a dyn FileLister, aggregator: Aggregator<'a>) -> Self {
        Self { lister, aggregator }
    }

    /// # Errors
    ///
    /// Fails when listing fails, when no file is found under the roots, or
    /// when the worker pool cannot be created. Per-file problems are counted,
    /// not returned.
    pub fn run(&self, plan: &ListingPlan) -> Result<Summary> {
        let files = self.lister.list_files(plan)?;
        if files.is_empty() {
            let roots = plan.roots.iter().map(|r| r.display().to_string()).collect::<Vec<_>>().join(", ");
            return Err(ApplicationError::NoInputFiles { roots }.into());
        }
        info!("counting {} files", files.len());

        let languages = self.aggregator.aggregate(&files)?;
        Ok(Summary::build(languages))
    }
}
