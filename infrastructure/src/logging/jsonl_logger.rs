//! JSONL file writer for plan events.
//!
//! Each [`PlanEvent`] is written as one JSON line carrying the payload plus
//! `type` and `timestamp` fields. The file is opened for append, so one log
//! can span several runs.

use kanji_application::ports::plan_events::{PlanEvent, PlanEventLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// JSONL plan event logger writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlPlanEventLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlPlanEventLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller then runs
    /// without an event log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create plan event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open plan event log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: PlanEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl PlanEventLogger for JsonlPlanEventLogger {
    fn log(&self, event: PlanEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            warn!("Could not write plan event to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlPlanEventLogger {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn read_lines(path: &Path) -> Vec<Value> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlPlanEventLogger::new(&path).unwrap();

        logger.log(PlanEvent::new(
            "plan_started",
            json!({"plan": "T1", "channel": "C1"}),
        ));
        logger.log(PlanEvent::new(
            "vote_recorded",
            json!({"plan": "T1", "participant": "U1", "slot": 2}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "plan_started");
        assert_eq!(lines[0]["channel"], "C1");
        assert_eq!(lines[1]["type"], "vote_recorded");
        assert_eq!(lines[1]["slot"], 2);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlPlanEventLogger::new(&path).unwrap();

        logger.log(PlanEvent::new("note", json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("events.jsonl");

        let first = JsonlPlanEventLogger::new(&path).unwrap();
        first.log(PlanEvent::new("plan_started", json!({"plan": "T1"})));
        drop(first);

        let second = JsonlPlanEventLogger::new(&path).unwrap();
        assert_eq!(second.path(), path.as_path());
        second.log(PlanEvent::new("plan_started", json!({"plan": "T2"})));
        drop(second);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["plan"], "T2");
    }

    #[test]
    fn test_keeps_logging_after_poisoned_lock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlPlanEventLogger::new(&path).unwrap();

        let panicked = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _writer = logger.writer.lock().unwrap();
                    panic!("writer poisoned");
                })
                .join()
                .is_err()
        });
        assert!(panicked);
        assert!(logger.writer.is_poisoned());

        logger.log(PlanEvent::new("vote_recorded", json!({"plan": "T1"})));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "vote_recorded");
    }

    #[test]
    fn test_unwritable_location_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file cannot be a parent directory
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(JsonlPlanEventLogger::new(blocker.join("events.jsonl")).is_none());
    }
}
