//! Implementation of the `derisk-cli list` command.

use crate::{
    commands::{ColorChoice, Project},
    error::{Error, Result},
    palette::{fmt_description, fmt_heading, fmt_skill_name},
    registry::Registry,
};

/// Execute the list command.
pub async fn run(color: ColorChoice, project: &Project, json: bool) -> Result<()> {
    let registry = project.registry();
    let output = if json {
        render_json(&registry)?
    } else {
        render(&registry, color.enabled())
    };
    print!("{output}");
    Ok(())
}

/// Render the registry as a heading plus one line per skill.
fn render(registry: &Registry, use_color: bool) -> String {
    if registry.is_empty() {
        return "No skills available.\n".to_string();
    }

    let mut out = format!("{}\n", fmt_heading("Available Skills:", use_color));
    for skill in registry.iter() {
        out.push_str(&format!(
            "- {}: {}\n",
            fmt_skill_name(&skill.name, use_color),
            fmt_description(&skill.description, use_color)
        ));
    }
    out
}

/// Render the registry as a JSON array.
fn render_json(registry: &Registry) -> Result<String> {
    let mut json = serde_json::to_string_pretty(registry.as_slice())
        .map_err(|error| Error::Serialize { source: error })?;
    json.push('\n');
    Ok(json)
}
