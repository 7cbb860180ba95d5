// crates/ports/src/catalog.rs
use std::path::Path;

use langcount_domain::LanguageProfile;
use langcount_shared_kernel::DomainResult;

/// Extension / filename table plus the profiles it points at.
pub trait LanguageCatalog: Send + Sync {
    /// Resolves the language name for `path`.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnresolvedLanguage`](langcount_shared_kernel::DomainError::UnresolvedLanguage)
    /// carrying the lower-cased extension when nothing matches.
    fn resolve_language(&self, path: &Path) -> DomainResult<String>;

    /// Profile of a configured language.
    fn profile(&self, language: &str) -> Option<&LanguageProfile>;

    /// Configured language names in ascending order.
    fn language_names(&self) -> Vec<&str>;
}
