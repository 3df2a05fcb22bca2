//! Audit logger for anonymisation operations

use crate::anonymisation::models::{AnonymisationResult, ReplacementCounts};
use crate::domain::{MindRepError, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry<'a> {
    timestamp: String,
    entry_id: String,
    original_length: usize,
    sanitised_length: usize,
    total_replacements: usize,
    replacements: &'a ReplacementCounts,
    ner_available: bool,
}

/// Appends one line per anonymisation to the audit log
#[derive(Debug)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    write_lock: Mutex<()>,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    MindRepError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the audit log
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Record one anonymisation; returns the generated entry id
    pub fn log_anonymisation(&self, result: &AnonymisationResult, ner_available: bool) -> Result<Uuid> {
        let entry_id = Uuid::new_v4();
        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            entry_id: entry_id.to_string(),
            original_length: result.original_length(),
            sanitised_length: result.sanitised_length(),
            total_replacements: result.total_replacements(),
            replacements: result.replacements(),
            ner_available,
        };

        self.write_entry(&entry)?;
        Ok(entry_id)
    }

    fn format_plain(entry: &AuditLogEntry<'_>) -> String {
        let counts = entry
            .replacements
            .iter()
            .map(|(label, count)| format!("{label}={count}"))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "[{}] Entry: {} | Length: {} -> {} | Replacements: {} ({}) | NER: {}",
            entry.timestamp,
            entry.entry_id,
            entry.original_length,
            entry.sanitised_length,
            entry.total_replacements,
            counts,
            if entry.ner_available { "available" } else { "unavailable" }
        )
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry<'_>) -> Result<()> {
        let line = if self.json_format {
            serde_json::to_string(entry)?
        } else {
            Self::format_plain(entry)
        };

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| MindRepError::Io("Audit log lock poisoned".to_string()))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                MindRepError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        writeln!(file, "{line}")
            .map_err(|e| MindRepError::Io(format!("Failed to write audit entry: {e}")))?;

        Ok(())
    }
}
