//! Replay source for exported snapshots.
//!
//! Polls a JSON file written by `--export` (or the `e` key) for dashboard
//! snapshots, so a captured session can be replayed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use intellifence_types::DashboardSnapshot;

use super::DataSource;

/// Replays a snapshot file, re-reading it whenever its mtime moves forward.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    error: Option<String>,
    seen_mtime: Option<SystemTime>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            description: format!("replay: {}", path.display()),
            path,
            error: None,
            seen_mtime: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mtime(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|meta| meta.modified()).ok()
    }

    /// Whether the file is worth reading again.
    ///
    /// A file that vanished after a successful read keeps the last frame.
    fn is_stale(&self, mtime: Option<SystemTime>) -> bool {
        match (self.seen_mtime, mtime) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(seen), Some(now)) => now > seen,
        }
    }

    fn load(&self) -> Result<DashboardSnapshot, String> {
        let raw = fs::read_to_string(&self.path).map_err(|e| format!("Read error: {}", e))?;
        serde_json::from_str(&raw).map_err(|e| format!("Parse error: {}", e))
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<DashboardSnapshot> {
        let mtime = self.mtime();
        if !self.is_stale(mtime) {
            return None;
        }

        match self.load() {
            Ok(snapshot) => {
                self.error = None;
                self.seen_mtime = mtime;
                Some(snapshot)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intellifence_types::{Alert, Severity};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn snapshot_json() -> String {
        let mut snapshot = DashboardSnapshot::default();
        snapshot.tick = 7;
        snapshot.alerts.push(Alert::new("Grid anomaly", Severity::Warning, 1));
        serde_json::to_string_pretty(&snapshot).unwrap()
    }

    #[test]
    fn test_replay_description() {
        let source = FileSource::new("/tmp/snapshot.json");
        assert_eq!(source.path(), Path::new("/tmp/snapshot.json"));
        assert_eq!(source.description(), "replay: /tmp/snapshot.json");
        assert!(source.error().is_none());
        assert!(source.simulation().is_none());
    }

    #[test]
    fn test_replay_returns_each_write_once() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", snapshot_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.tick, 7);
        assert_eq!(snapshot.alerts[0].severity, Severity::Warning);

        // Unchanged mtime
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_replay_reports_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/snapshot.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_replay_reports_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_replay_recovers_after_fix() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{").unwrap();
        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().is_some());

        // A failed read never records the mtime, so the next poll retries.
        std::fs::write(file.path(), snapshot_json()).unwrap();
        assert!(source.poll().is_some());
        assert!(source.error().is_none());
    }
}
