//! Registered skill metadata.

use serde::{Deserialize, Serialize};

/// Name and description of a registered skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillDescriptor {
    /// Skill name.
    pub name: String,
    /// One-line description of what the skill does.
    pub description: String,
}

impl SkillDescriptor {
    /// Build a descriptor from a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Skills shipped with the tool: `(name, description)`.
const BUILTIN_SKILLS: &[(&str, &str)] = &[];

/// Ordered, read-only collection of skill descriptors.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Descriptors in declaration order.
    skills: Vec<SkillDescriptor>,
}

impl Registry {
    /// Build a registry from an explicit list of descriptors.
    pub fn new(skills: Vec<SkillDescriptor>) -> Self {
        Self { skills }
    }

    /// Build a registry holding the built-in skills.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SKILLS
                .iter()
                .map(|(name, description)| SkillDescriptor::new(*name, *description))
                .collect(),
        )
    }

    /// Append extra descriptors after the existing ones.
    pub fn with_extra(mut self, extra: &[SkillDescriptor]) -> Self {
        self.skills.extend_from_slice(extra);
        self
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDescriptor> {
        self.skills.iter()
    }

    /// Return the descriptors as a slice.
    pub fn as_slice(&self) -> &[SkillDescriptor] {
        &self.skills
    }

    /// Return true when no skills are registered.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
