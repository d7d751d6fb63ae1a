//! mdsweep CLI — argument parsing and application wiring.

#![doc = include_str!("../README.md")]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod app;
pub mod cli;

pub use cli::CliArgs;
