//! pagegrid Generator Library
//!
//! Page generation engine for pagegrid.
//!
//! # Modules
//!
//! - [`selector`] - Product selection with catalog-head fallback
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - Recommendation page rendering
//! - [`index`] - Landing page grouped by product
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`clock`] - Year source for rendered output
//! - [`build`] - Build orchestration

pub mod build;
pub mod clock;
pub mod html;
pub mod index;
pub mod robots;
pub mod selector;
pub mod sitemap;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use html::HtmlGenerator;
pub use index::IndexGenerator;
pub use robots::RobotsGenerator;
pub use selector::{Selection, select, select_products};
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
