//! CLI command implementations.

use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{config::Config, error::Result, paths, registry::Registry};

/// Output color handling selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colorize only when output is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorChoice {
    /// Determine whether color output should be enabled.
    pub(crate) fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// A resolved project root and its configuration.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root directory.
    root: PathBuf,
    /// Loaded configuration.
    config: Config,
}

impl Project {
    /// Locate the project root and load its configuration.
    pub(crate) fn load(root: Option<&Path>) -> Result<Self> {
        let root = paths::resolve_root(root)?;
        debug!(root = %root.display(), "resolved project root");
        let config = Config::load(&root)?;
        Ok(Self { root, config })
    }

    /// Return the project root.
    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    /// Return the loaded configuration.
    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Build the registry: built-in skills followed by configured ones.
    pub(crate) fn registry(&self) -> Registry {
        Registry::builtin().with_extra(self.config.skills())
    }
}

// Command modules are ordered alphabetically - maintain this order.
/// Init command implementation.
pub mod init;
/// List command implementation.
pub mod list;
/// New command implementation.
pub mod new;
/// Register command implementation.
pub mod register;
