// src/config/mod.rs

pub mod format;
pub mod scan;

pub use format::OutputFormat;
pub use scan::ScanConfig;
