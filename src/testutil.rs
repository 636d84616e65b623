//! Test utilities for setting up mock project trees.
//!
//! `TemplateFixture` creates an isolated project root with the default
//! template and output layout, with a fluent builder API for populating it.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use walkdir::{DirEntry, WalkDir};

use crate::{
    paths::{DEFAULT_AGENTS_DIR, DEFAULT_SKILLS_DIR, DEFAULT_TEMPLATES_DIR},
    scaffold::{Kind, Layout},
};

/// Isolated project root with template and output directories.
pub struct TemplateFixture {
    /// Root temp directory (holds everything).
    _root: TempDir,
    /// Project root path.
    root: PathBuf,
}

impl TemplateFixture {
    /// Create a fixture with empty skill and agent templates.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        let root_path = root.path().to_path_buf();
        let fixture = Self {
            _root: root,
            root: root_path,
        };
        fs::create_dir_all(fixture.skill_template()).expect("create skill template");
        fs::create_dir_all(fixture.agent_template()).expect("create agent template");
        fixture
    }

    /// Add a file under the skill template.
    pub fn with_skill_template_file(self, relative: &str, contents: &str) -> Self {
        let path = self.skill_template().join(relative);
        write_file(&path, contents);
        self
    }

    /// Add a directory under the skill template.
    pub fn with_skill_template_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.skill_template().join(relative)).expect("create template dir");
        self
    }

    /// Add a file under the agent template.
    pub fn with_agent_template_file(self, relative: &str, contents: &str) -> Self {
        let path = self.agent_template().join(relative);
        write_file(&path, contents);
        self
    }

    /// Add a file anywhere under the project root.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        write_file(&self.root.join(relative), contents);
        self
    }

    /// Remove the skill template entirely.
    pub fn without_skill_template(self) -> Self {
        fs::remove_dir_all(self.skill_template()).expect("remove skill template");
        self
    }

    /// Get the project root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the skill template directory.
    pub fn skill_template(&self) -> PathBuf {
        self.root
            .join(DEFAULT_TEMPLATES_DIR)
            .join(Kind::Skill.template_name())
    }

    /// Get the agent template directory.
    pub fn agent_template(&self) -> PathBuf {
        self.root
            .join(DEFAULT_TEMPLATES_DIR)
            .join(Kind::Agent.template_name())
    }

    /// Get the skills output root.
    pub fn skills_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_SKILLS_DIR)
    }

    /// Get the agents output root.
    pub fn agents_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_AGENTS_DIR)
    }

    /// Build the default layout for this project.
    pub fn layout(&self) -> Layout {
        Layout {
            templates: self.root.join(DEFAULT_TEMPLATES_DIR),
            skills: self.skills_dir(),
            agents: self.agents_dir(),
        }
    }
}

impl Default for TemplateFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write file");
}

/// List files under `dir` as sorted, slash-separated relative paths.
pub fn relative_files(dir: &Path) -> Vec<String> {
    relative_entries(dir, |entry| !entry.file_type().is_dir())
}

/// List directories under `dir` (excluding `dir`) as sorted relative paths.
pub fn relative_dirs(dir: &Path) -> Vec<String> {
    relative_entries(dir, |entry| entry.file_type().is_dir())
}

/// Collect relative paths of entries matching `keep`.
fn relative_entries(dir: &Path, keep: impl Fn(&DirEntry) -> bool) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.expect("walk entry"))
        .filter(|entry| keep(entry))
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .expect("relative path")
                .components()
                .map(|part| part.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    entries.sort();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_template_layout() {
        let fixture = TemplateFixture::new()
            .with_skill_template_file("skill.yaml", "name: demo\n")
            .with_agent_template_file("agent.yaml", "name: demo\n");

        assert!(fixture.skill_template().join("skill.yaml").is_file());
        assert!(fixture.agent_template().join("agent.yaml").is_file());
        assert!(!fixture.skills_dir().exists());
    }

    #[test]
    fn lists_relative_entries() {
        let fixture = TemplateFixture::new()
            .with_skill_template_file("b/c.txt", "c")
            .with_skill_template_file("a.txt", "a");

        assert_eq!(relative_files(&fixture.skill_template()), ["a.txt", "b/c.txt"]);
        assert_eq!(relative_dirs(&fixture.skill_template()), ["b"]);
    }
}
