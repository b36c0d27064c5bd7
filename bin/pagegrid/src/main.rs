//! pagegrid CLI
//!
//! Generates a grid of SEO product recommendation pages, an index page and a
//! sitemap. Running with no arguments uses `pagegrid.toml` (or built-in
//! defaults) from the current directory.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for pagegrid.
#[derive(Parser)]
#[command(
    name = "pagegrid",
    version,
    about = "Generate SEO product recommendation pages from a keyword grid"
)]
struct Cli {
    /// Path to configuration file [default: pagegrid.toml if present]
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Output directory (overrides build.output_dir)
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Site base URL used in the sitemap (e.g., https://example.com)
    #[arg(long)]
    base_url: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    pagegrid::init_tracing(cli.verbose);

    pagegrid::cmd::build::run(
        cli.config.as_deref(),
        cli.output.as_deref(),
        cli.base_url.as_deref(),
    )
}
