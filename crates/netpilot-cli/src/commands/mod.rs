//! CLI command handlers

pub mod config;
pub mod generate;
pub mod kb;
pub mod prompt;
pub mod retrieve;
