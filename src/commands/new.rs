//! Implementation of the `derisk-cli new` command.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    commands::{ColorChoice, Project},
    diagnostics::Diagnostics,
    error::{Error, Result},
    palette::{fmt_path, fmt_skill_name},
    paths::display_path,
    scaffold::{AssumeYes, Confirmer, Kind, Layout, Outcome, Prompt, scaffold},
};

/// Execute the new command.
pub async fn run(
    color: ColorChoice,
    verbose: bool,
    project: &Project,
    kind: Kind,
    name: String,
    force: bool,
) -> Result<()> {
    let mut diagnostics = Diagnostics::new(verbose);
    let mut confirmer: Box<dyn Confirmer> = if force {
        Box::new(AssumeYes)
    } else {
        Box::new(Prompt)
    };
    let use_color = color.enabled();

    let path = create(
        project.config().layout(),
        kind,
        &name,
        confirmer.as_mut(),
        &mut diagnostics,
    )?;
    debug!(root = %project.root().display(), "scaffold complete");
    println!(
        "New {} {} created successfully at {} from template.",
        kind.label(),
        fmt_skill_name(&name, use_color),
        fmt_path(&display_path(&path), use_color)
    );
    diagnostics.print_ignored_summary();
    diagnostics.print_warning_summary();
    Ok(())
}

/// Scaffold `name`, turning a declined overwrite into `Error::Aborted`.
fn create(
    layout: &Layout,
    kind: Kind,
    name: &str,
    confirmer: &mut dyn Confirmer,
    diagnostics: &mut Diagnostics,
) -> Result<PathBuf> {
    match scaffold(layout, kind, name, confirmer, diagnostics)? {
        Outcome::Cancelled { path } => {
            debug!(path = %path.display(), "overwrite declined");
            Err(Error::Aborted)
        }
        Outcome::Created { path, report } => {
            debug!(
                files = report.files.len(),
                directories = report.directories.len(),
                "copied template"
            );
            Ok(path)
        }
    }
}
