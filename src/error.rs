//! Error types for the derisk-skills CLI.

use std::{env::VarError, io, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for derisk-skills operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// The operator declined to overwrite an existing directory.
    #[error("Aborted!")]
    Aborted,
    /// The project config file could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The project config file could not be parsed.
    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: TomlError,
    },
    /// The working directory could not be determined.
    #[error("Failed to resolve the working directory: {source}")]
    CurrentDir {
        /// Underlying IO error.
        source: io::Error,
    },
    /// A configured path could not be expanded.
    #[error("Invalid path: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// A path was not valid Unicode for expansion.
    #[error("Invalid path: {path}")]
    PathNotUnicode {
        /// Path that could not be represented as UTF-8.
        path: PathBuf,
    },
    /// An interactive prompt was interrupted or canceled.
    #[error("Prompt canceled.")]
    PromptCanceled,
    /// An interactive prompt failed.
    #[error("Prompt failed: {message}")]
    PromptFailed {
        /// Error message describing the prompt failure.
        message: String,
    },
    /// A skill or agent name cannot be used as a directory name.
    #[error("Invalid {kind} name '{name}': expected a single directory name")]
    InvalidName {
        /// Kind of directory being created.
        kind: &'static str,
        /// Rejected name.
        name: String,
    },
    /// The template directory to copy from does not exist.
    #[error("Template directory does not exist: {path}")]
    TemplateMissing {
        /// Expected template directory.
        path: PathBuf,
    },
    /// The template tree could not be walked.
    #[error("Failed to read template entry at {path}: {source}")]
    TemplateWalk {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A template file could not be copied.
    #[error("Failed to copy {from} to {to}: {source}")]
    TemplateCopy {
        /// Source file.
        from: PathBuf,
        /// Destination file.
        to: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A destination directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// An existing target could not be removed before overwriting.
    #[error("Failed to remove {path}: {source}")]
    TargetRemove {
        /// Path that failed to be removed.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Output could not be written to the terminal.
    #[error("Failed to write output: {source}")]
    Output {
        /// Underlying IO error.
        source: io::Error,
    },
    /// Output could not be serialized.
    #[error("Failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
