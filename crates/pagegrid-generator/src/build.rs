//! Build orchestration.
//!
//! Coordinates the full site build: catalog, pages, index, sitemap.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use pagegrid_core::{Catalog, Config, CoreError, PageDescriptor, enumerate};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    html::{HtmlError, HtmlGenerator},
    index::IndexGenerator,
    robots::{RobotsError, RobotsGenerator},
    selector,
    sitemap::SitemapGenerator,
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a file or directory under the output directory failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `build.clean` would delete a build input.
    #[error(
        "refusing to clean {}: it contains {}",
        dir.display(),
        protected.display()
    )]
    UnsafeClean { dir: PathBuf, protected: PathBuf },

    /// Catalog or configuration error.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// The catalog loaded but holds no products.
    #[error("catalog {0} contains no products; every page needs at least one")]
    EmptyCatalog(String),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Robots generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of recommendation pages generated.
    pub pages: usize,

    /// Pages that used fallback products.
    pub fallback_pages: usize,

    /// Links written to the index page.
    pub index_links: usize,

    /// Entries written to the sitemap.
    pub sitemap_urls: usize,

    /// Whether robots.txt was written.
    pub robots: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    clock: Arc<dyn Clock>,
    protected: Vec<PathBuf>,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            protected: Vec::new(),
        }
    }

    /// Use a specific year source instead of the system clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Never clean an output directory that contains `path`. The catalog and
    /// the working directory are always protected.
    #[must_use]
    pub fn protect(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected.push(path.into());
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();
        let output_dir = self.config.build.output_dir.as_path();

        info!(
            catalog = %self.config.build.catalog.display(),
            output = %output_dir.display(),
            "starting build"
        );

        if self.config.has_placeholder_base_url() {
            warn!(
                base_url = %self.config.site.base_url,
                "site.base_url is still the placeholder; set it before deploying"
            );
        }

        // Nothing is written until the catalog is known to be usable.
        let catalog = self.load_catalog()?;
        let pages = enumerate(&self.config.keywords);

        self.prepare_output(output_dir)?;

        let generator = HtmlGenerator::with_clock(self.config.clone(), Arc::clone(&self.clock));
        info!(count = pages.len(), "generating HTML pages");

        for page in &pages {
            let selection = selector::select(&catalog, &page.product, &page.audience);
            if selection.fallback {
                debug!(slug = %page.slug, "no matching products, using fallback");
                stats.fallback_pages += 1;
            }

            let html = generator.generate_page(page, &selection.products)?;
            let output_path = output_dir.join(page.file_name());
            write_file(&output_path, &html)?;

            debug!(path = %output_path.display(), "wrote page");
            stats.pages += 1;
        }

        stats.index_links = self.generate_index(&pages, output_dir)?;
        stats.sitemap_urls = self.generate_sitemap(&pages, output_dir)?;
        stats.robots = RobotsGenerator::new(self.config.clone()).generate(output_dir)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            fallback_pages = stats.fallback_pages,
            index_links = stats.index_links,
            sitemap_urls = stats.sitemap_urls,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let path = &self.config.build.catalog;
        let catalog = Catalog::load(path)?;

        if catalog.is_empty() {
            return Err(BuildError::EmptyCatalog(path.display().to_string()));
        }

        info!(products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Create the output directory, wiping it first when configured to.
    fn prepare_output(&self, output_dir: &Path) -> Result<()> {
        if self.config.build.clean && output_dir.exists() {
            self.check_clean_target(output_dir)?;
            debug!(dir = %output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(output_dir).map_err(|source| BuildError::Write {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }
        fs::create_dir_all(output_dir).map_err(|source| BuildError::Write {
            path: output_dir.to_path_buf(),
            source,
        })
    }

    /// Fail if wiping `output_dir` would delete the catalog, a protected path
    /// or the working directory.
    fn check_clean_target(&self, output_dir: &Path) -> Result<()> {
        let dir = output_dir.canonicalize()?;
        let cwd = std::env::current_dir()?;

        let inputs = std::iter::once(&self.config.build.catalog)
            .chain(&self.protected)
            .chain(std::iter::once(&cwd));

        for path in inputs {
            // Paths that do not exist cannot be lost.
            let Ok(resolved) = path.canonicalize() else {
                continue;
            };

            if resolved.starts_with(&dir) {
                return Err(BuildError::UnsafeClean {
                    dir: output_dir.to_path_buf(),
                    protected: path.clone(),
                });
            }
        }

        Ok(())
    }

    fn generate_index(&self, pages: &[PageDescriptor], output_dir: &Path) -> Result<usize> {
        let generator = IndexGenerator::with_clock(self.config.clone(), Arc::clone(&self.clock));

        let html = generator.generate(pages)?;
        let output_path = output_dir.join("index.html");
        write_file(&output_path, &html)?;

        info!(path = %output_path.display(), "generated index");
        Ok(generator.link_count(pages))
    }

    fn generate_sitemap(&self, pages: &[PageDescriptor], output_dir: &Path) -> Result<usize> {
        let generator = SitemapGenerator::new(self.config.clone());

        let xml = generator.generate(pages);
        let output_path = output_dir.join("sitemap.xml");
        write_file(&output_path, &xml)?;

        info!(path = %output_path.display(), "generated sitemap");
        Ok(pages.len() + 1)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pagegrid_core::KeywordGrid;
    use tempfile::TempDir;

    use super::*;
    use crate::clock::FixedClock;

    const CATALOG: &str = r#"[
        {"name": "X", "category": "laptop", "best_for": ["developers"],
         "features": ["fast"], "price": "$999", "link": "http://a"}
    ]"#;

    fn test_config(dir: &TempDir) -> Config {
        let catalog = dir.path().join("products.json");
        fs::write(&catalog, CATALOG).unwrap();

        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config.keywords = KeywordGrid::new(&["laptop", "chair"], &["developers"], &["usa"]);
        config.build.catalog = catalog;
        config.build.output_dir = dir.path().join("output");
        config
    }

    #[test]
    fn test_build_small_site() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let output = config.build.output_dir.clone();

        let stats = Builder::new(config)
            .with_clock(FixedClock(2026))
            .build()
            .unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.fallback_pages, 1);
        assert_eq!(stats.index_links, 2);
        assert_eq!(stats.sitemap_urls, 3);
        assert!(!stats.robots);
        assert!(output.join("best-laptop-for-developers-in-usa.html").exists());
        assert!(output.join("best-chair-for-developers-in-usa.html").exists());
        assert!(output.join("index.html").exists());
        assert!(output.join("sitemap.xml").exists());
        assert!(!output.join("robots.txt").exists());
    }

    #[test]
    fn test_build_empty_catalog_fails_before_writing() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        fs::write(&config.build.catalog, "[]").unwrap();
        let output = config.build.output_dir.clone();

        let err = Builder::new(config).build().unwrap_err();

        assert!(matches!(err, BuildError::EmptyCatalog(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_build_cleans_stale_output() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.build.clean = true;
        let output = config.build.output_dir.clone();
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.html"), "old").unwrap();

        Builder::new(config).build().unwrap();

        assert!(!output.join("stale.html").exists());
    }

    #[test]
    fn test_build_keeps_other_files_by_default() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        assert!(!config.build.clean);
        let output = config.build.output_dir.clone();
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("CNAME"), "example.com").unwrap();

        Builder::new(config).build().unwrap();

        assert!(output.join("CNAME").exists());
        assert!(output.join("index.html").exists());
    }

    #[test]
    fn test_clean_refuses_directory_holding_catalog() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.build.clean = true;
        config.build.output_dir = dir.path().to_path_buf();
        let catalog = config.build.catalog.clone();

        let err = Builder::new(config).build().unwrap_err();

        assert!(matches!(err, BuildError::UnsafeClean { .. }));
        assert!(catalog.exists());
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_clean_refuses_directory_holding_protected_path() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.build.clean = true;
        let output = config.build.output_dir.clone();
        fs::create_dir_all(&output).unwrap();
        let config_file = output.join("pagegrid.toml");
        fs::write(&config_file, "").unwrap();

        let err = Builder::new(config)
            .protect(&config_file)
            .build()
            .unwrap_err();

        assert!(matches!(err, BuildError::UnsafeClean { .. }));
        assert!(config_file.exists());
    }

    #[test]
    fn test_clean_refuses_working_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.build.clean = true;

        let err = Builder::new(config)
            .check_clean_target(Path::new("."))
            .unwrap_err();
        assert!(matches!(err, BuildError::UnsafeClean { .. }));
    }

    #[test]
    fn test_write_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let output = config.build.output_dir.clone();
        fs::create_dir_all(output.join("index.html")).unwrap();

        let err = Builder::new(config).build().unwrap_err();

        assert!(matches!(err, BuildError::Write { .. }));
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn test_build_with_robots() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.robots.enabled = true;
        let output = config.build.output_dir.clone();

        let stats = Builder::new(config).build().unwrap();

        assert!(stats.robots);
        let robots = fs::read_to_string(output.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_build_stats_default() {
        let stats = BuildStats::default();
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.duration_ms, 0);
    }
}
