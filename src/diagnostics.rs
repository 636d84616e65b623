//! Warning aggregation and diagnostic summaries.

use std::path::PathBuf;

/// Aggregates warnings and ignored template entries for a command run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Whether summaries should be printed.
    verbose: bool,
    /// Collected warning messages.
    warnings: Vec<String>,
    /// Template entries left out of a copy, relative to the template root.
    ignored: Vec<PathBuf>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub(crate) fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Record a warning and print it immediately.
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Record template entries that were not copied.
    pub(crate) fn record_ignored(&mut self, paths: &[PathBuf]) {
        self.ignored.extend_from_slice(paths);
    }

    /// Return the recorded warnings.
    #[cfg(test)]
    pub(crate) fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Return the recorded ignored entries.
    #[cfg(test)]
    pub(crate) fn ignored(&self) -> &[PathBuf] {
        &self.ignored
    }

    /// Print the ignored template entries when running verbosely.
    pub(crate) fn print_ignored_summary(&self) {
        if !self.verbose || self.ignored.is_empty() {
            return;
        }

        eprintln!("Ignored {} template entries:", self.ignored.len());
        for path in &self.ignored {
            eprintln!("  - {}", path.display());
        }
    }

    /// Print a warning summary when warnings were emitted.
    pub(crate) fn print_warning_summary(&self) {
        if self.warnings.is_empty() {
            return;
        }

        eprintln!("Completed with {} warning(s).", self.warnings.len());
    }
}
