// src/activity_log/store.rs

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::model::{ActivityClass, ActivityEvent, LOG_FILE_NAME, MAX_LOG_EVENTS};

/// The last `MAX_LOG_EVENTS` events, mirrored to a JSONL file. New events are
/// appended; once the file holds more lines than the cap it is rewritten from
/// memory. Writes never fail the caller.
pub struct ActivityLog {
    path: PathBuf,
    buf: VecDeque<ActivityEvent>,
    next_id: u64,
    // lines currently in the file, readable or not
    file_lines: usize,
    storage_warn_pending: bool,
}

impl ActivityLog {
    pub fn init(app_data_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(app_data_dir).map_err(|e| AppError::ActivityLogInit(e.to_string()))?;

        let mut log = Self {
            path: app_data_dir.join(LOG_FILE_NAME),
            buf: VecDeque::with_capacity(MAX_LOG_EVENTS),
            next_id: 1,
            file_lines: 0,
            storage_warn_pending: false,
        };

        log.load_best_effort();
        log.next_id = log.buf.back().map_or(1, |e| e.id.saturating_add(1));

        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&mut self, class: ActivityClass, kind: &str, context: &str, msg: &str) {
        let ev = ActivityEvent {
            id: self.next_id,
            ts_ms: chrono::Utc::now().timestamp_millis(),
            class,
            kind: kind.to_string(),
            context: context.to_string(),
            msg: msg.to_string(),
        };
        self.next_id = self.next_id.saturating_add(1);

        if class == ActivityClass::Storage {
            self.storage_warn_pending = true;
        }

        let res = if self.file_lines >= MAX_LOG_EVENTS {
            self.push(ev);
            self.compact()
        } else {
            let res = self.append(&ev);
            self.push(ev);
            res
        };

        if let Err(e) = res {
            log::warn!("activity log: {e}");
        }
    }

    /// Most recent last.
    pub fn recent(&self) -> Vec<ActivityEvent> {
        self.buf.iter().cloned().collect()
    }

    pub fn take_storage_warn_pending(&mut self) -> bool {
        std::mem::take(&mut self.storage_warn_pending)
    }

    fn push(&mut self, ev: ActivityEvent) {
        if self.buf.len() >= MAX_LOG_EVENTS {
            self.buf.pop_front();
        }
        self.buf.push_back(ev);
    }

    fn append(&mut self, ev: &ActivityEvent) -> Result<(), String> {
        let mut line = serde_json::to_string(ev).map_err(|e| format!("encode: {e}"))?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()))
            .map_err(|e| format!("append: {e}"))?;

        self.file_lines += 1;
        Ok(())
    }

    // Replaces the file with the in-memory events; unreadable lines go with it.
    fn compact(&mut self) -> Result<(), String> {
        let mut out = String::new();
        for ev in &self.buf {
            out.push_str(&serde_json::to_string(ev).map_err(|e| format!("encode: {e}"))?);
            out.push('\n');
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, out).map_err(|e| format!("compact write: {e}"))?;
        fs::rename(&tmp, &self.path).map_err(|e| format!("compact rename: {e}"))?;

        self.file_lines = self.buf.len();
        Ok(())
    }

    fn load_best_effort(&mut self) {
        let Ok(file) = File::open(&self.path) else {
            return;
        };

        for line in BufReader::new(file).lines().map_while(Result::ok) {
            self.file_lines += 1;
            // torn or foreign lines are skipped
            if let Ok(ev) = serde_json::from_str::<ActivityEvent>(&line) {
                self.push(ev);
            }
        }
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(path: &Path) -> usize {
        fs::read_to_string(path)
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    #[test]
    fn record_appends_and_reloads() {
        let td = tempfile::tempdir().unwrap();
        {
            let mut log = ActivityLog::init(td.path()).unwrap();
            log.record(ActivityClass::Session, "login", "test", "user 1");
            log.record(ActivityClass::Seal, "sealed", "test", "digest abc");
        }

        let log = ActivityLog::init(td.path()).unwrap();
        let recent = log.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].kind, "sealed");
        assert_eq!(log.next_id, 3);
    }

    #[test]
    fn trims_file_and_memory_to_cap() {
        let td = tempfile::tempdir().unwrap();
        let mut log = ActivityLog::init(td.path()).unwrap();
        for i in 0..(MAX_LOG_EVENTS + 5) {
            log.record(ActivityClass::Draft, "tick", "test", &i.to_string());
        }

        assert_eq!(log.recent().len(), MAX_LOG_EVENTS);
        assert_eq!(count_lines(log.path()), MAX_LOG_EVENTS);
        assert_eq!(log.recent()[0].msg, "5");
    }

    #[test]
    fn compaction_drops_unreadable_lines_and_keeps_ids_increasing() {
        let td = tempfile::tempdir().unwrap();
        let garbage = "garbage\n".repeat(MAX_LOG_EVENTS);
        fs::write(td.path().join(LOG_FILE_NAME), garbage).unwrap();

        let mut log = ActivityLog::init(td.path()).unwrap();
        assert!(log.recent().is_empty());

        log.record(ActivityClass::Session, "login", "test", "");
        assert_eq!(count_lines(log.path()), 1);

        log.record(ActivityClass::Session, "logout", "test", "");
        let reloaded = ActivityLog::init(td.path()).unwrap();
        let ids: Vec<u64> = reloaded.recent().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let names: Vec<String> = fs::read_dir(td.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![LOG_FILE_NAME.to_string()]);
    }

    #[test]
    fn skips_garbage_lines_on_load() {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join(LOG_FILE_NAME), "garbage\n{\"nope\":1}\n").unwrap();

        let log = ActivityLog::init(td.path()).unwrap();
        assert!(log.recent().is_empty());
    }

    #[test]
    fn storage_events_raise_warning_once() {
        let td = tempfile::tempdir().unwrap();
        let mut log = ActivityLog::init(td.path()).unwrap();

        log.record(ActivityClass::Session, "login", "test", "");
        assert!(!log.take_storage_warn_pending());

        log.record(ActivityClass::Storage, "session_unreadable", "test", "bad json");
        assert!(log.take_storage_warn_pending());
        assert!(!log.take_storage_warn_pending());
    }
}
