//! HTML page rendering
//!
//! Injects the snapshot into a static template by plain text substitution.

use super::{read_snapshot, Snapshot};
use anyhow::Context;
use chrono::{DateTime, Local};
use std::path::Path;

/// Replaced (first occurrence only) by the human-readable generation time
pub const GENERATED_AT_PLACEHOLDER: &str = "%GENERATED_AT%";

/// Replaced (every occurrence) by the compact snapshot JSON
pub const DATA_PLACEHOLDER: &str = "%DATA_JSON%";

/// Substitute both placeholders; missing placeholders are not an error
pub fn render_template(template: &str, data_json: &str, generated_at: &str) -> String {
    template
        .replacen(GENERATED_AT_PLACEHOLDER, generated_at, 1)
        .replace(DATA_PLACEHOLDER, data_json)
}

/// `18/10/2026, 09:30:00`
pub fn format_generated_at(at: DateTime<Local>) -> String {
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Render the snapshot at `snapshot_path` into the template at
/// `template_path`, writing the page to `output_path`
///
/// `output_path` may be the template itself, which is then overwritten.
pub fn render_file(
    snapshot_path: impl AsRef<Path>,
    template_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    generated_at: DateTime<Local>,
) -> anyhow::Result<Snapshot> {
    let template_path = template_path.as_ref();
    let output_path = output_path.as_ref();

    let snapshot = read_snapshot(snapshot_path)?;
    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let data_json = serde_json::to_string(&snapshot)?;
    let page = render_template(&template, &data_json, &format_generated_at(generated_at));

    std::fs::write(output_path, page)
        .with_context(|| format!("Failed to write page to {}", output_path.display()))?;

    Ok(snapshot)
}
