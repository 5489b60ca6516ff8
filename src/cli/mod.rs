//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use cdsfetch::credentials::{Origin, ResolvedConfig};

/// Help banner with ANSI styling: bold name, dimmed rest.
pub const ABOUT: &str =
    "\x1b[1mcdsfetch\x1b[0m \x1b[2m· Plan and check Copernicus Climate Data Store downloads.\x1b[0m";

/// Describe where each credential came from, one line per setting.
pub fn describe_credentials(resolved: &ResolvedConfig) -> Vec<(String, String)> {
    fn origin(o: Option<Origin>) -> String {
        o.map(|o| format!("({o})")).unwrap_or_default()
    }

    let file_state = if resolved.file_read() {
        "read"
    } else if resolved.config_path().exists() {
        "not needed"
    } else {
        "not found"
    };

    vec![
        (
            "url:".to_string(),
            format!(
                "{} {}",
                resolved.url().unwrap_or("<missing>"),
                origin(resolved.url_origin())
            )
            .trim_end()
            .to_string(),
        ),
        (
            "key:".to_string(),
            format!(
                "{} {}",
                resolved
                    .key()
                    .map(|k| k.masked())
                    .unwrap_or_else(|| "<missing>".to_string()),
                origin(resolved.key_origin())
            )
            .trim_end()
            .to_string(),
        ),
        (
            "file:".to_string(),
            format!("{} ({file_state})", resolved.config_path().display()),
        ),
        (
            "verify:".to_string(),
            if resolved.verify() { "yes" } else { "no" }.to_string(),
        ),
    ]
}
