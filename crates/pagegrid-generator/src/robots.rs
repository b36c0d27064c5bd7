//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pagegrid_core::Config;
use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// Writing robots.txt failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render robots.txt content.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("User-agent: *\n");

        for path in &self.config.robots.disallow {
            out.push_str(&format!("Disallow: {path}\n"));
        }

        for path in &self.config.robots.allow {
            out.push_str(&format!("Allow: {path}\n"));
        }

        out.push_str(&format!(
            "Sitemap: {}\n",
            self.config.url_for("sitemap.xml")
        ));
        out
    }

    /// Write robots.txt into `output_dir` when enabled. Returns whether a file
    /// was written.
    pub fn generate(&self, output_dir: &Path) -> Result<bool> {
        if !self.config.robots.enabled {
            return Ok(false);
        }

        info!("generating robots.txt");
        let path = output_dir.join("robots.txt");
        fs::write(&path, self.render()).map_err(|source| RobotsError::Write { path, source })?;
        Ok(true)
    }
}
