//! Path expansion, normalization and project root discovery.

use std::{
    env,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use path_clean::PathClean;

use crate::{
    config::CONFIG_FILE_NAME,
    error::{Error, Result},
};

/// Template root relative to the project root.
pub const DEFAULT_TEMPLATES_DIR: &str = "src/_template";
/// Skills output root relative to the project root.
pub const DEFAULT_SKILLS_DIR: &str = "src/derisk_skills/skills";
/// Agents output root relative to the project root.
pub const DEFAULT_AGENTS_DIR: &str = "src/derisk_skills/agents";

/// Resolve the project root from an explicit override or the working directory.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|error| Error::CurrentDir { source: error })?;
    if let Some(explicit) = explicit {
        let raw = explicit.to_str().ok_or_else(|| Error::PathNotUnicode {
            path: explicit.to_path_buf(),
        })?;
        return expand_path(raw, &cwd);
    }
    Ok(find_root(&cwd).unwrap_or_else(|| normalize_path(&cwd)))
}

/// Find the nearest ancestor that looks like a skills project.
pub fn find_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join(DEFAULT_TEMPLATES_DIR).is_dir())
        .map(normalize_path)
}

/// Expand a user-provided path and resolve it relative to a base directory.
pub fn expand_path(raw: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    let expanded_path = PathBuf::from(expanded.as_ref());
    let resolved = if expanded_path.is_relative() {
        base_dir.join(expanded_path)
    } else {
        expanded_path
    };
    Ok(normalize_path(&resolved))
}

/// Normalize a path by canonicalizing when possible and cleaning otherwise.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}
