use std::fmt::Write as _;

use crate::config::Profile;
use crate::layout::Layout;

/// Web generator the manual step points the developer at.
pub const GENERATOR_URL: &str = "https://glad.dav1d.de/";

/// Render the manual follow-up instructions: generator checklist plus the
/// extraction mapping into the layout. Deterministic for fixed inputs.
pub fn render(layout: &Layout, api: &str, profile: Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Please visit {GENERATOR_URL} to generate GLAD files");
    let _ = writeln!(out, "Configuration:");
    let _ = writeln!(out, "  - Language: C/C++");
    let _ = writeln!(out, "  - Specification: OpenGL");
    let _ = writeln!(out, "  - API gl: Version {api}+");
    let _ = writeln!(out, "  - Profile: {}", profile.as_str());
    let _ = writeln!(out, "  - Generate a loader: YES");
    let _ = writeln!(out);
    let _ = writeln!(out, "After downloading, extract:");
    let _ = writeln!(out, "  - include/glad/* -> {}/", layout.include_glad());
    let _ = writeln!(out, "  - include/KHR/* -> {}/", layout.include_khr());
    let _ = writeln!(out, "  - src/glad.c -> {}/", layout.src_dir());
    out
}
