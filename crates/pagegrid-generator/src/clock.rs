//! Year source for rendered pages.

use chrono::{Datelike, Local};

/// Supplies the year stamped into page titles and footers.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current calendar year.
    fn year(&self) -> i32;
}

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}
