// puma/src/lib.rs

pub mod cli;
pub mod config;

pub use config::{OutputFormat, ScanConfig};
