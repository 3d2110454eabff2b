//! Append-only log of client environment documents.
//!
//! Each accepted document is wrapped in a timestamped record and appended as
//! one JSON line. The file and its parent directories are created on demand.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::EnvironmentError;

/// Default location of the environment log.
pub const DEFAULT_ENV_LOG_FILE: &str = "logs/environments.log";

/// One line of the environment log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    /// RFC 3339 UTC timestamp with second precision.
    pub timestamp: String,
    pub environment: Map<String, Value>,
}

/// Body returned after a record has been stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveStatus {
    pub status: &'static str,
}

/// Appends environment documents to a JSON-lines file.
#[derive(Debug, Clone)]
pub struct EnvironmentLog {
    path: PathBuf,
}

impl EnvironmentLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validates a raw request body and appends it as a new record.
    ///
    /// The body must be a non-empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::EmptyBody`] or
    /// [`EnvironmentError::InvalidJson`] for a rejected body, and an I/O
    /// variant if the record could not be written. Nothing is written on
    /// error.
    pub fn save(&self, body: &[u8]) -> Result<SaveStatus, EnvironmentError> {
        if body.is_empty() {
            return Err(EnvironmentError::EmptyBody);
        }
        let environment: Map<String, Value> =
            serde_json::from_slice(body).map_err(EnvironmentError::InvalidJson)?;

        let record = EnvironmentRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            environment,
        };
        self.append(&record)?;

        Ok(SaveStatus { status: "saved" })
    }

    /// Appends a record as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or the log file
    /// cannot be prepared, opened or written.
    pub fn append(&self, record: &EnvironmentRecord) -> Result<(), EnvironmentError> {
        let mut line = serde_json::to_vec(record).map_err(EnvironmentError::Serialize)?;
        line.push(b'\n');

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| EnvironmentError::PrepareDirectory {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| EnvironmentError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(&line)
            .map_err(|source| EnvironmentError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), bytes = line.len(), "saved environment record");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read_records(path: &Path) -> Vec<EnvironmentRecord> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn saves_simple_object() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path().join("env.log"));

        let status = log.save(br#"{"foo":"bar"}"#).unwrap();
        assert_eq!(status, SaveStatus { status: "saved" });

        let records = read_records(log.path());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].environment["foo"], "bar");
        assert!(chrono::DateTime::parse_from_rfc3339(&records[0].timestamp).is_ok());
    }

    #[test]
    fn saves_nested_object() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path().join("env.log"));
        log.save(br#"{"nested":{"key":"value"}}"#).unwrap();

        let records = read_records(log.path());
        assert_eq!(
            records[0].environment["nested"],
            serde_json::json!({"key": "value"})
        );
    }

    #[test]
    fn appends_instead_of_truncating() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path().join("env.log"));
        log.save(br#"{"n":1}"#).unwrap();
        log.save(br"{}").unwrap();
        log.save(br#"{"n":3}"#).unwrap();

        let records = read_records(log.path());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].environment["n"], 1);
        assert!(records[1].environment.is_empty());
        assert_eq!(records[2].environment["n"], 3);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent").join("deeper").join("env.log");
        EnvironmentLog::new(&path).save(br#"{"test":"data"}"#).unwrap();
        assert_eq!(read_records(&path).len(), 1);
    }

    #[test]
    fn rejects_empty_body() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path().join("env.log"));
        let err = log.save(b"").unwrap_err();
        assert!(matches!(err, EnvironmentError::EmptyBody));
        assert_eq!(err.to_string(), "empty request body");
        assert!(!log.path().exists());
    }

    #[test]
    fn rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path().join("env.log"));
        let bodies: [&[u8]; 4] = [b"{invalid", b"{", b"[1, 2]", b"\"text\""];
        for body in bodies {
            let err = log.save(body).unwrap_err();
            assert!(err.is_client_error());
            assert!(err.to_string().starts_with("invalid JSON"));
        }
        assert!(!log.path().exists());
    }

    #[test]
    fn directory_in_place_of_file_fails_to_open() {
        let dir = tempdir().unwrap();
        let log = EnvironmentLog::new(dir.path());
        let err = log.save(br#"{"test":"data"}"#).unwrap_err();
        assert!(matches!(err, EnvironmentError::Open { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn file_in_place_of_directory_fails_to_prepare() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("logs");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let log = EnvironmentLog::new(blocker.join("env.log"));
        let err = log.save(br#"{"test":"data"}"#).unwrap_err();
        assert!(matches!(err, EnvironmentError::PrepareDirectory { .. }));
        assert_eq!(std::fs::read(&blocker).unwrap(), b"not a directory");
    }
}
