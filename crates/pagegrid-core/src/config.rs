//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    keyword::KeywordGrid,
};

/// Placeholder base URL that must be replaced before deployment.
pub const PLACEHOLDER_BASE_URL: &str = "https://yourusername.github.io/yoursite";

/// Main configuration structure for pagegrid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Keyword matrix the pages are generated from.
    #[serde(default)]
    pub keywords: KeywordGrid,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, shown on the index page.
    #[serde(default = "default_title")]
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language code for the `lang` attribute.
    #[serde(default = "default_language")]
    pub language: String,

    /// Affiliate disclosure printed in every page footer.
    #[serde(default = "default_disclosure")]
    pub disclosure: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Path to the JSON product catalog.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Output directory for the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum number of links per product group on the index page.
    #[serde(default = "default_index_limit")]
    pub index_limit: usize,

    /// Whether to wipe the output directory before writing. The builder
    /// refuses to wipe a directory holding the catalog, the config file or
    /// the working directory.
    #[serde(default)]
    pub clean: bool,
}

/// robots.txt configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether to write robots.txt.
    #[serde(default)]
    pub enabled: bool,

    /// Paths to disallow.
    #[serde(default)]
    pub disallow: Vec<String>,

    /// Paths to allow explicitly.
    #[serde(default)]
    pub allow: Vec<String>,
}

// Default value functions
fn default_title() -> String {
    "Best Gear Guides".to_string()
}

fn default_base_url() -> String {
    PLACEHOLDER_BASE_URL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_disclosure() -> String {
    "As an Amazon Associate, we earn from qualifying purchases.".to_string()
}

fn default_catalog() -> PathBuf {
    PathBuf::from("products.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_index_limit() -> usize {
    20
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            language: default_language(),
            disclosure: default_disclosure(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            output_dir: default_output_dir(),
            index_limit: default_index_limit(),
            clean: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file if present, with `PAGEGRID__*`
    /// environment overrides layered on top.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(path, None)
    }

    /// Layer the file and the environment. `env` replaces the process
    /// environment when given.
    fn load_layered(path: &Path, env: Option<config::Map<String, String>>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("PAGEGRID")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, normalising the base URL.
    pub fn validate(&mut self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
            self.site.base_url = self.site.base_url.trim_end_matches('/').to_string();
        }

        if self.build.index_limit == 0 {
            return Err(CoreError::config("build.index_limit must be at least 1"));
        }

        self.keywords.validate()
    }

    /// Whether the base URL is still the deployment placeholder.
    #[must_use]
    pub fn has_placeholder_base_url(&self) -> bool {
        self.site.base_url == PLACEHOLDER_BASE_URL
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
