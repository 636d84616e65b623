//! ASCII banner and tagline.

use crate::palette;

/// Banner art, one entry per line.
const BANNER: &[&str] = &[
    r"    ____            _      __         _________ ",
    r"   / __ \___  _____(_)____/ /__      / ____/ (_)",
    r"  / / / / _ \/ ___/ / ___/ //_/_____/ /   / / / ",
    r" / /_/ /  __/ /  / (__  ) ,< /_____/ /___/ / /  ",
    r"/_____/\___/_/  /_/____/_/|_|      \____/_/_/   ",
];

/// Tagline printed under the banner.
pub const TAGLINE: &str = "OpenDerisk Skills - Spec-Driven AIOps Skills for Risk Management";

/// Render the banner, the tagline and a trailing blank line.
pub fn render(use_color: bool) -> String {
    let styles = palette::banner_cycle();
    let mut out = String::new();
    for (index, line) in BANNER.iter().enumerate() {
        let style = styles[index % styles.len()];
        out.push_str(&palette::paint(line, style, use_color));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&palette::paint(TAGLINE, palette::tagline(), use_color));
    out.push_str("\n\n");
    out
}
