//! Implementation of the `derisk-cli register` command.
//!
//! Registration with the platform is not wired up yet; the command reports
//! which skills would be registered.

use crate::{
    commands::{ColorChoice, Project},
    error::Result,
    palette::fmt_skill_name,
    registry::Registry,
};

/// Execute the register command.
pub async fn run(color: ColorChoice, project: &Project) -> Result<()> {
    print!("{}", render(&project.registry(), color.enabled()));
    Ok(())
}

/// Render the registration status lines.
fn render(registry: &Registry, use_color: bool) -> String {
    let mut out = String::from("Registering skills to OpenDeRisk platform...\n");
    for skill in registry.iter() {
        out.push_str(&format!(
            "Registered skill: {}\n",
            fmt_skill_name(&skill.name, use_color)
        ));
    }
    out
}
