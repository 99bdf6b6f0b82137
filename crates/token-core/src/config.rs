//! # Config Module
//!
//! Site build settings, layered: defaults, then environment, then caller overrides.
//!
//! ## Environment
//! - `TOKENDOC_TOKENS_DIR`: read token documents from this directory instead of the bundled set.
//! - `TOKENDOC_SITE_TITLE`: title used in page headers.

use crate::catalog::{DirectorySource, EmbeddedSource, TokenCatalog, TokenSource};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const TOKENS_DIR_ENV: &str = "TOKENDOC_TOKENS_DIR";
pub const SITE_TITLE_ENV: &str = "TOKENDOC_SITE_TITLE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// `None` uses the bundled token set.
    pub tokens_dir: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            tokens_dir: None,
            out_dir: PathBuf::from("site"),
            format: OutputFormat::Markdown,
            title: "Design Tokens".to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults overlaid with `TOKENDOC_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(TOKENS_DIR_ENV).filter(|v| !v.is_empty()) {
            config.tokens_dir = Some(PathBuf::from(dir));
        }
        if let Some(title) = lookup(SITE_TITLE_ENV).filter(|v| !v.is_empty()) {
            config.title = title;
        }
        config
    }

    pub fn source(&self) -> Box<dyn TokenSource> {
        match &self.tokens_dir {
            Some(dir) => Box::new(DirectorySource::new(dir.clone())),
            None => Box::new(EmbeddedSource),
        }
    }

    pub fn load_catalog(&self) -> Result<TokenCatalog> {
        TokenCatalog::load(self.source().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.source().describe(), "embedded");
    }

    #[test]
    fn test_env_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            TOKENS_DIR_ENV => Some("/srv/tokens".to_string()),
            SITE_TITLE_ENV => Some("Acme Tokens".to_string()),
            _ => None,
        });
        assert_eq!(config.tokens_dir, Some(PathBuf::from("/srv/tokens")));
        assert_eq!(config.title, "Acme Tokens");
        assert_eq!(config.source().describe(), "/srv/tokens");
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = SiteConfig::from_lookup(|_| Some(String::new()));
        assert!(config.tokens_dir.is_none());
        assert_eq!(config.title, "Design Tokens");
    }
}
