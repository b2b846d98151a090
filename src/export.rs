//! Snapshot export for later replay.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use intellifence_types::DashboardSnapshot;

/// Write a snapshot as pretty JSON, replacing any existing file.
///
/// The file is written to a sibling temp path and renamed into place, so a
/// [`FileSource`](crate::FileSource) polling `path` never sees half a file.
pub fn write_snapshot(path: &Path, snapshot: &DashboardSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let mut file =
        fs::File::create(tmp).with_context(|| format!("creating {}", tmp.display()))?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(tmp, path).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(path = %path.display(), tick = snapshot.tick, "snapshot exported");
    Ok(())
}
