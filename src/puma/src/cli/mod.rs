// src/cli/mod.rs

pub mod scan;
pub mod stats;

pub use scan::{scan_file, scan_source};
pub use stats::{stats_file, stats_source};
