//! Color palette and styling for CLI output.
//!
//! This module defines a consistent visual style for all CLI output.
//! Every formatter takes a `use_color` flag and returns plain text when it is
//! false, so output stays byte-exact when piped.

use owo_colors::{OwoColorize, Style};

/// Styles cycled across the banner lines, top to bottom.
pub fn banner_cycle() -> [Style; 6] {
    [
        Style::new().bright_blue(),
        Style::new().blue(),
        Style::new().cyan(),
        Style::new().bright_cyan(),
        Style::new().red(),
        Style::new().bright_red(),
    ]
}

/// Style for the tagline under the banner.
pub fn tagline() -> Style {
    Style::new().italic().bright_yellow()
}

/// Style for skill names - the primary identifier, visually prominent.
pub fn skill_name() -> Style {
    Style::new().cyan().bold()
}

/// Style for section headings like "Available Skills:".
pub fn heading() -> Style {
    Style::new().white().bold()
}

/// Style for description text - readable but subdued.
pub fn description() -> Style {
    Style::new().dimmed()
}

/// Style for path values.
pub fn path() -> Style {
    Style::new().white()
}

/// Apply `style` to `text` when color is enabled.
pub fn paint(text: &str, style: Style, use_color: bool) -> String {
    if use_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Format a skill name with styling.
pub fn fmt_skill_name(name: &str, use_color: bool) -> String {
    paint(name, skill_name(), use_color)
}

/// Format a section heading with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    paint(text, heading(), use_color)
}

/// Format description text with styling.
pub fn fmt_description(text: &str, use_color: bool) -> String {
    paint(text, description(), use_color)
}

/// Format a path with styling.
pub fn fmt_path(text: &str, use_color: bool) -> String {
    paint(text, path(), use_color)
}
