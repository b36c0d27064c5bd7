//! pagegrid CLI Library
//!
//! Provides the functionality behind the `pagegrid` binary. The binary entry
//! point only parses arguments and delegates here.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pagegrid::cmd;
//!
//! cmd::build::run(Some(Path::new("pagegrid.toml")), None, None).unwrap();
//! ```

pub mod cmd;

pub use pagegrid_core::{Catalog, Config, PageDescriptor};
pub use pagegrid_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
