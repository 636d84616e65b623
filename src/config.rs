//! Project configuration loading.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    paths::{self, DEFAULT_AGENTS_DIR, DEFAULT_SKILLS_DIR, DEFAULT_TEMPLATES_DIR},
    registry::SkillDescriptor,
    scaffold::Layout,
};

/// Name of the optional config file at the project root.
pub const CONFIG_FILE_NAME: &str = "derisk-skills.toml";

/// Resolved configuration for a project.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory layout for templates and scaffold targets.
    layout: Layout,
    /// Skills declared in the config file, in declaration order.
    skills: Vec<SkillDescriptor>,
}

/// Raw config file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// Template root override.
    templates: Option<String>,
    /// Skills output root override.
    skills_dir: Option<String>,
    /// Agents output root override.
    agents_dir: Option<String>,
    /// Additional registry entries.
    #[serde(default)]
    skills: Vec<SkillDescriptor>,
}

impl Config {
    /// Load the config for a project root, falling back to defaults when absent.
    pub(crate) fn load(root: &Path) -> Result<Self> {
        Self::load_from(&root.join(CONFIG_FILE_NAME), root)
    }

    /// Load a config file from an explicit path, resolving paths against `root`.
    pub(crate) fn load_from(path: &Path, root: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|error| Error::ConfigParse {
                path: path.to_path_buf(),
                source: error,
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound => RawConfig::default(),
            Err(error) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: error,
                });
            }
        };

        let layout = Layout {
            templates: resolve(raw.templates.as_deref(), DEFAULT_TEMPLATES_DIR, root)?,
            skills: resolve(raw.skills_dir.as_deref(), DEFAULT_SKILLS_DIR, root)?,
            agents: resolve(raw.agents_dir.as_deref(), DEFAULT_AGENTS_DIR, root)?,
        };

        Ok(Self {
            layout,
            skills: raw.skills,
        })
    }

    /// Return the resolved directory layout.
    pub(crate) fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Return the skills declared in the config file.
    pub(crate) fn skills(&self) -> &[SkillDescriptor] {
        &self.skills
    }
}

/// Resolve an optional configured path, using `default` when unset.
fn resolve(raw: Option<&str>, default: &str, root: &Path) -> Result<PathBuf> {
    match raw {
        Some(raw) => paths::expand_path(raw, root),
        None => Ok(paths::normalize_path(&root.join(default))),
    }
}
