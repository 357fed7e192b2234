//! Terminal output for CLI handlers.
//!
//! Human-readable lines by default, one JSON object per line with `--json`.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde_json::json;

/// Output mode chosen from global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Set the output mode. Only the first call takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn mode() -> OutputConfig {
    OUTPUT_CONFIG.get().copied().unwrap_or_default()
}

fn emit_json(kind: &str, payload: serde_json::Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Print a section header.
pub fn section(title: &str) {
    let mode = mode();
    if mode.json {
        emit_json("section", json!({ "title": title }));
    } else if !mode.quiet {
        println!();
        println!("{}", title.bold());
    }
}

/// Print a labeled value. Shown even in quiet mode.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if mode().json {
        emit_json("field", json!({ "label": label, "value": value }));
    } else {
        println!("  {:<14} {}", label.dimmed(), value);
    }
}

pub fn success(message: &str) {
    let mode = mode();
    if mode.json {
        emit_json("success", json!({ "message": message }));
    } else if !mode.quiet {
        println!("  {} {}", "✓".green(), message);
    }
}

pub fn warning(message: &str) {
    if mode().json {
        emit_json("warning", json!({ "message": message }));
    } else {
        println!("  {} {}", "⚠".yellow(), message);
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if mode().json {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}
