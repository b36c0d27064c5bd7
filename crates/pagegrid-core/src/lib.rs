//! pagegrid Core Library
//!
//! Core types, configuration, catalog loading and keyword enumeration for the
//! pagegrid page generator.

pub mod catalog;
pub mod config;
pub mod error;
pub mod keyword;

pub use catalog::{Catalog, Product};
pub use config::Config;
pub use error::{CoreError, Result};
pub use keyword::{KeywordGrid, PageDescriptor, enumerate};
