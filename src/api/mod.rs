//! Page-level entry points and emission settings.

mod chart;
mod config;

pub use chart::{Chart, ChartConstructor, SharedOptions};
pub use config::LiteralConfig;
