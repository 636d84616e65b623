//! Implementation of the `derisk-cli init` command.

use crate::{banner, commands::ColorChoice, error::Result};

/// Execute the init command.
pub async fn run(color: ColorChoice) -> Result<()> {
    print!("{}", banner::render(color.enabled()));
    Ok(())
}
