//! Scaffolding of new skill and agent directories from templates.
//!
//! A scaffold runs check, confirm, delete, copy in that order. The template
//! is validated before the confirmation is requested, so an existing
//! directory is never removed unless it can be repopulated.

use std::{
    fs,
    io::{self, IsTerminal},
    path::{Component, Path, PathBuf},
};

use inquire::{Confirm, error::InquireError};
use tracing::debug;

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
    paths::display_path,
    template::{CloneReport, clone_tree},
};

/// What is being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A skill under the skills namespace.
    Skill,
    /// An agent under the agents namespace.
    Agent,
}

impl Kind {
    /// Return the lowercase label used in messages.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Agent => "agent",
        }
    }

    /// Return the template directory name under the template root.
    pub(crate) fn template_name(self) -> &'static str {
        match self {
            Self::Skill => "default_skill_template",
            Self::Agent => "default_agent_template",
        }
    }
}

/// Resolved template and output roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory holding one template per kind.
    pub(crate) templates: PathBuf,
    /// Directory new skills are created in.
    pub(crate) skills: PathBuf,
    /// Directory new agents are created in.
    pub(crate) agents: PathBuf,
}

impl Layout {
    /// Return the template directory for a kind.
    pub(crate) fn template_dir(&self, kind: Kind) -> PathBuf {
        self.templates.join(kind.template_name())
    }

    /// Return the output root for a kind.
    pub(crate) fn output_root(&self, kind: Kind) -> &Path {
        match kind {
            Kind::Skill => &self.skills,
            Kind::Agent => &self.agents,
        }
    }
}

/// Source of overwrite confirmations.
pub trait Confirmer {
    /// Ask whether to proceed; `Ok(false)` means the operator declined.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Interactive terminal prompt defaulting to "no".
#[derive(Debug, Default)]
pub struct Prompt;

impl Confirmer for Prompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            return Err(Error::PromptFailed {
                message: "stdin is not a terminal; pass --force to overwrite".to_string(),
            });
        }
        match Confirm::new(message).with_default(false).prompt() {
            Ok(value) => Ok(value),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Err(Error::PromptCanceled)
            }
            Err(error) => Err(Error::PromptFailed {
                message: error.to_string(),
            }),
        }
    }
}

/// Confirmer that always accepts, used for `--force`.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Result of the confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Nothing is in the way, or the operator agreed to overwrite.
    Proceed,
    /// The operator declined to overwrite.
    Cancelled,
}

/// Final state of a scaffold run.
#[derive(Debug)]
pub enum Outcome {
    /// The target was (re)created from the template.
    Created {
        /// Created directory.
        path: PathBuf,
        /// What was copied.
        report: CloneReport,
    },
    /// The operator declined; the target was left untouched.
    Cancelled {
        /// Existing directory that was kept.
        path: PathBuf,
    },
}

/// Validated source and destination for a scaffold.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Kind being scaffolded.
    kind: Kind,
    /// Template to copy from.
    template_dir: PathBuf,
    /// Directory to create.
    target_dir: PathBuf,
}

impl Plan {
    /// Validate `name` and the template for `kind`.
    pub(crate) fn resolve(layout: &Layout, kind: Kind, name: &str) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName {
                kind: kind.label(),
                name: name.to_string(),
            });
        }

        let template_dir = layout.template_dir(kind);
        if !template_dir.is_dir() {
            return Err(Error::TemplateMissing { path: template_dir });
        }

        Ok(Self {
            kind,
            template_dir,
            target_dir: layout.output_root(kind).join(name),
        })
    }

    /// Return the directory that will be created.
    #[cfg(test)]
    pub(crate) fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Decide whether the copy may go ahead, asking when the target exists.
    pub(crate) fn decide(&self, confirmer: &mut dyn Confirmer) -> Result<Decision> {
        if !target_exists(&self.target_dir) {
            return Ok(Decision::Proceed);
        }

        let message = format!(
            "The {} directory '{}' already exists. Do you want to overwrite it?",
            self.kind.label(),
            display_path(&self.target_dir)
        );
        if confirmer.confirm(&message)? {
            Ok(Decision::Proceed)
        } else {
            Ok(Decision::Cancelled)
        }
    }
}

/// Create `name` of `kind` from its template.
pub(crate) fn scaffold(
    layout: &Layout,
    kind: Kind,
    name: &str,
    confirmer: &mut dyn Confirmer,
    diagnostics: &mut Diagnostics,
) -> Result<Outcome> {
    let plan = Plan::resolve(layout, kind, name)?;

    if plan.decide(confirmer)? == Decision::Cancelled {
        return Ok(Outcome::Cancelled {
            path: plan.target_dir,
        });
    }

    if target_exists(&plan.target_dir) {
        remove_target(&plan.target_dir)?;
    }

    let report = clone_tree(&plan.template_dir, &plan.target_dir, diagnostics)?;
    diagnostics.record_ignored(&report.ignored);
    Ok(Outcome::Created {
        path: plan.target_dir,
        report,
    })
}

/// Return true if a name is a single plain directory name.
fn is_valid_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Return true if anything, including a dangling symlink, occupies `path`.
fn target_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Delete an existing target, whatever its file type.
fn remove_target(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|error| Error::TargetRemove {
        path: path.to_path_buf(),
        source: error,
    })?;
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|error| Error::TargetRemove {
        path: path.to_path_buf(),
        source: error,
    })?;
    debug!(path = %path.display(), "removed existing target");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{Confirmer, Decision, Kind, Outcome, Plan, scaffold};
    use crate::{
        diagnostics::Diagnostics,
        error::{Error, Result},
        testutil::{TemplateFixture, relative_files, write_file},
    };

    /// Confirmer with a fixed answer that records every question.
    struct Scripted {
        /// Answer returned for every prompt.
        answer: bool,
        /// Messages asked so far.
        asked: Vec<String>,
    }

    impl Scripted {
        /// Build a confirmer that always gives `answer`.
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Vec::new(),
            }
        }
    }

    impl Confirmer for Scripted {
        fn confirm(&mut self, message: &str) -> Result<bool> {
            self.asked.push(message.to_string());
            Ok(self.answer)
        }
    }

    /// Skill template with one real file and one cache directory.
    fn skill_fixture() -> TemplateFixture {
        TemplateFixture::new()
            .with_skill_template_file("skill.yaml", "name: template\n")
            .with_skill_template_file("__pycache__/cache.bin", "cache")
    }

    #[test]
    fn creates_new_skill_without_asking() {
        let fixture = skill_fixture();
        let mut confirmer = Scripted::answering(false);

        let outcome = scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut confirmer,
            &mut Diagnostics::new(false),
        )
        .expect("scaffold");

        let target = fixture.skills_dir().join("foo");
        assert!(matches!(outcome, Outcome::Created { ref path, .. } if *path == target));
        assert!(confirmer.asked.is_empty());
        assert_eq!(relative_files(&target), ["skill.yaml"]);
        assert!(!target.join("__pycache__").exists());
    }

    #[test]
    fn creates_agent_from_agent_template() {
        let fixture = TemplateFixture::new().with_agent_template_file("agent.yaml", "kind: agent\n");

        scaffold(
            &fixture.layout(),
            Kind::Agent,
            "triage",
            &mut Scripted::answering(true),
            &mut Diagnostics::new(false),
        )
        .expect("scaffold");

        assert_eq!(relative_files(&fixture.agents_dir().join("triage")), ["agent.yaml"]);
        assert!(!fixture.skills_dir().exists());
    }

    #[test]
    fn declined_overwrite_leaves_target_untouched() {
        let fixture = skill_fixture();
        let target = fixture.skills_dir().join("foo");
        write_file(&target.join("notes.md"), "keep me");
        let mut confirmer = Scripted::answering(false);

        let outcome = scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut confirmer,
            &mut Diagnostics::new(false),
        )
        .expect("scaffold");

        assert!(matches!(outcome, Outcome::Cancelled { .. }));
        assert_eq!(confirmer.asked.len(), 1);
        assert!(confirmer.asked[0].contains("already exists"));
        assert_eq!(relative_files(&target), ["notes.md"]);
        assert_eq!(
            fs::read_to_string(target.join("notes.md")).expect("read"),
            "keep me"
        );
    }

    #[test]
    fn accepted_overwrite_replaces_stale_content() {
        let fixture = skill_fixture();
        let target = fixture.skills_dir().join("foo");
        write_file(&target.join("notes.md"), "stale");
        write_file(&target.join("skill.yaml"), "name: old\n");

        scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut Scripted::answering(true),
            &mut Diagnostics::new(false),
        )
        .expect("scaffold");

        assert_eq!(relative_files(&target), ["skill.yaml"]);
        assert_eq!(
            fs::read_to_string(target.join("skill.yaml")).expect("read"),
            "name: template\n"
        );
    }

    #[test]
    fn replaces_a_file_standing_in_for_the_target() {
        let fixture = skill_fixture();
        let target = fixture.skills_dir().join("foo");
        write_file(&target, "not a directory");

        scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut Scripted::answering(true),
            &mut Diagnostics::new(false),
        )
        .expect("scaffold");

        assert!(target.join("skill.yaml").is_file());
    }

    #[test]
    fn missing_template_fails_before_asking() {
        let fixture = TemplateFixture::new().without_skill_template();
        let target = fixture.skills_dir().join("foo");
        write_file(&target.join("notes.md"), "keep me");
        let mut confirmer = Scripted::answering(true);

        let error = scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut confirmer,
            &mut Diagnostics::new(false),
        )
        .expect_err("scaffold should fail");

        assert!(matches!(error, Error::TemplateMissing { .. }));
        assert!(confirmer.asked.is_empty());
        assert_eq!(relative_files(&target), ["notes.md"]);
    }

    #[test]
    fn rejects_names_that_are_not_plain_directories() {
        let fixture = skill_fixture();
        for name in ["", ".", "..", "a/b", "../escape", "a\\b", "/abs"] {
            let error = Plan::resolve(&fixture.layout(), Kind::Skill, name)
                .expect_err("name should be rejected");
            assert!(matches!(error, Error::InvalidName { .. }), "{name}");
        }
    }

    #[test]
    fn proceeds_without_prompt_when_target_missing() {
        let fixture = skill_fixture();
        let plan = Plan::resolve(&fixture.layout(), Kind::Skill, "fresh").expect("plan");
        let mut confirmer = Scripted::answering(false);

        assert_eq!(plan.decide(&mut confirmer).expect("decide"), Decision::Proceed);
        assert_eq!(plan.target_dir(), fixture.skills_dir().join("fresh"));
        assert!(confirmer.asked.is_empty());
    }

    #[test]
    fn records_ignored_entries_in_diagnostics() {
        let fixture = skill_fixture();
        let mut diagnostics = Diagnostics::new(true);

        let outcome = scaffold(
            &fixture.layout(),
            Kind::Skill,
            "foo",
            &mut Scripted::answering(true),
            &mut diagnostics,
        )
        .expect("scaffold");

        let Outcome::Created { report, .. } = outcome else {
            panic!("expected created outcome");
        };
        assert_eq!(report.ignored.len(), 1);
        assert_eq!(diagnostics.ignored().len(), 1);
    }
}
