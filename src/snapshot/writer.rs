//! Snapshot persistence as JSON

use super::Snapshot;
use anyhow::Context;
use std::path::Path;

/// Write the snapshot as pretty-printed JSON, replacing any existing file
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &Snapshot) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Snapshot written");
    Ok(())
}

/// Read a snapshot previously written by [`write_snapshot`]
pub fn read_snapshot(path: impl AsRef<Path>) -> anyhow::Result<Snapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot from {}", path.display()))?;
    let snapshot = serde_json::from_str(&content)
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    Ok(snapshot)
}
