//! CLI command handlers

pub mod commands;

pub use commands::{convert, INPUT_PATH, OUTPUT_PATH};
