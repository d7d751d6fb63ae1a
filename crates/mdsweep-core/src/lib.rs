//! mdsweep core — line filter, document discovery, and cleaning driver.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`filter`]: Removal rules for generated digest boilerplate
//! - [`walker`]: Markdown document discovery
//! - [`clean`]: Read/filter/rewrite driver

#![doc = include_str!("../README.md")]

pub mod clean;
pub mod error;
pub mod filter;
pub mod walker;

// Re-export key types at crate root for convenience
pub use clean::{CleanSummary, clean_path};
pub use error::{Error, Result};
pub use filter::{StripRules, strip_unwanted_sections};
pub use walker::collect_markdown_files;
