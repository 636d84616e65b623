#![warn(missing_docs)]
//! Library support for the derisk-skills CLI.

/// ASCII banner and tagline.
mod banner;
/// Command-line interface wiring and dispatch.
mod cli;
/// Command implementations.
mod commands;
/// Project configuration loading.
mod config;
/// Common diagnostics and warning aggregation.
mod diagnostics;
/// Error handling for the crate.
mod error;
/// Color palette and styling for CLI output.
mod palette;
/// Path expansion and project root discovery.
mod paths;
/// Registered skill metadata.
mod registry;
/// Scaffolding workflow for new skills and agents.
mod scaffold;
/// Template tree cloning.
mod template;
/// Test fixtures for project trees.
#[cfg(test)]
mod testutil;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub async fn run() -> Result<()> {
    cli::run().await
}
