// crates/infra/src/catalog.rs
//! Language catalog backed by the embedded `languages.json` table, with an
//! optional JSON / YAML override file layered on top.

use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use langcount_domain::{DelimiterPair, LanguageProfile};
use langcount_ports::catalog::LanguageCatalog;
use langcount_shared_kernel::{
    DomainError, DomainResult, ErrorContext, InfrastructureError, LangCountError, Result,
    path::{extension_of, lowercase_file_name},
};
use log::debug;
use serde::Deserialize;

const EMBEDDED_TABLE: &str = include_str!("../assets/languages.json");

/// On-disk shape of one language entry. Keys not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct LanguageEntry {
    #[serde(default)]
    line_comment: Vec<String>,
    #[serde(default)]
    multi_line_comments: Vec<DelimiterPair>,
    #[serde(default)]
    doc_quotes: Vec<DelimiterPair>,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    filenames: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LanguageTable {
    #[serde(default)]
    languages: BTreeMap<String, LanguageEntry>,
}

impl LanguageTable {
    fn parse_json(text: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| config_load(origin, e.to_string()))
    }

    fn parse_yaml(text: &str, origin: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| config_load(origin, e.to_string()))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| config_load(&origin, e.to_string()))?;
        match extension_of(path).as_str() {
            "yaml" | "yml" => Self::parse_yaml(&text, &origin),
            _ => Self::parse_json(&text, &origin),
        }
    }

    /// Entries of `other` replace same-named entries here.
    fn overlay(&mut self, other: Self) {
        for (name, entry) in other.languages {
            if self.languages.insert(name.clone(), entry).is_some() {
                debug!("language '{name}' replaced by override");
            }
        }
    }
}

fn config_load(origin: &str, details: String) -> LangCountError {
    InfrastructureError::ConfigLoad { origin: origin.to_string(), details }.into()
}

/// Validated profiles plus the extension and filename lookup tables.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: BTreeMap<String, LanguageProfile>,
    extensions: HashMap<String, String>,
    filenames: HashMap<String, String>,
}

impl ProfileCatalog {
    /// Catalog built from the table compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only if the embedded table itself is malformed.
    pub fn embedded() -> Result<Self> {
        Self::build(LanguageTable::parse_json(EMBEDDED_TABLE, "embedded table")?)
    }

    /// Embedded table, optionally overlaid with the file at `overrides`
    /// (`.yaml`/`.yml` parsed as YAML, anything else as JSON).
    ///
    /// # Errors
    ///
    /// [`InfrastructureError::ConfigLoad`] when the file cannot be read or
    /// parsed, [`DomainError::InvalidConfiguration`] when a profile is invalid
    /// (wrapped in a context naming the override file).
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        let mut table = LanguageTable::parse_json(EMBEDDED_TABLE, "embedded table")?;
        let Some(path) = overrides else {
            return Self::build(table);
        };
        debug!("loading language overrides from {}", path.display());
        table.overlay(LanguageTable::load_file(path)?);
        Self::build(table)
            .with_context(|| format!("language overrides from {} rejected", path.display()))
    }

    /// Catalog from a JSON document only, without the embedded table.
    ///
    /// # Errors
    ///
    /// Same as [`ProfileCatalog::load`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::build(LanguageTable::parse_json(text, "inline table")?)
    }

    fn build(table: LanguageTable) -> Result<Self> {
        let mut profiles = BTreeMap::new();
        let mut extensions = HashMap::new();
        let mut filenames = HashMap::new();

        // BTreeMap order: the first claimant of a key is the smaller name.
        for (name, entry) in table.languages {
            let profile = LanguageProfile {
                name: name.clone(),
                line_comments: entry.line_comment,
                block_comments: entry.multi_line_comments,
                multiline_strings: entry.doc_quotes,
            };
            profile.validate()?;

            for ext in entry.extensions {
                let ext = ext.trim_start_matches('.').to_lowercase();
                claim(&mut extensions, ext, &name, "extension");
            }
            for file in entry.filenames {
                claim(&mut filenames, file.to_lowercase(), &name, "filename");
            }
            profiles.insert(name, profile);
        }

        if profiles.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "no languages configured".to_string(),
            }
            .into());
        }

        debug!(
            "language catalog: {} languages, {} extensions, {} filenames",
            profiles.len(),
            extensions.len(),
            filenames.len()
        );
        Ok(Self { profiles, extensions, filenames })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn claim(map: &mut HashMap<String, String>, key: String, language: &str, kind: &str) {
    if let Some(owner) = map.get(&key) {
        debug!("{kind} '{key}' claimed by '{owner}' and '{language}', keeping '{owner}'");
        return;
    }
    map.insert(key, language.to_string());
}

impl LanguageCatalog for ProfileCatalog {
    fn resolve_language(&self, path: &Path) -> DomainResult<String> {
        let ext = extension_of(path);
        if let Some(language) = self.extensions.get(&ext) {
            return Ok(language.clone());
        }
        if let Some(language) = self.filenames.get(&lowercase_file_name(path)) {
            return Ok(language.clone());
        }
        Err(DomainError::UnresolvedLanguage { path: path.to_path_buf(), ext })
    }

    fn profile(&self, language: &str) -> Option<&LanguageProfile> {
        self.profiles.get(language)
    }

    fn language_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}
