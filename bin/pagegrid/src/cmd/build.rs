//! Build command - generates the page grid

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr, bail};
use pagegrid_core::Config;
use pagegrid_generator::Builder;

/// Configuration file used when none is given on the command line.
pub const DEFAULT_CONFIG: &str = "pagegrid.toml";

/// Load configuration.
///
/// With no explicit path, `pagegrid.toml` is used if present and built-in
/// defaults otherwise. An explicit path must exist.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            path
        }
        None => Path::new(DEFAULT_CONFIG),
    };

    if !path.exists() {
        tracing::info!(?path, "No configuration file, using built-in defaults");
    }

    Config::load_with_env(path).wrap_err("Failed to load configuration")
}

/// Run the build command.
///
/// Generates every page, the index and the sitemap into the output directory.
pub fn run(config_path: Option<&Path>, output: Option<&Path>, base_url: Option<&str>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, "Starting build");

    let mut config = load_config(config_path)?;

    if let Some(out) = output {
        config.build.output_dir = out.to_path_buf();
    }

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
        config.validate().wrap_err("Invalid --base-url")?;
    }

    tracing::debug!(?config, "Loaded configuration");

    let output_dir = config.build.output_dir.clone();
    let stats = Builder::new(config)
        .protect(config_path.unwrap_or(Path::new(DEFAULT_CONFIG)))
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!("Generated {} SEO pages successfully", stats.pages);
    println!();
    println!("  Fallback:   {}", stats.fallback_pages);
    println!("  Index:      {} links", stats.index_links);
    println!("  Sitemap:    {} URLs", stats.sitemap_urls);
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
