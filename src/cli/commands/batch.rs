//! Batch command implementation
//!
//! This module implements the `batch` command: entries are read from a
//! JSON-lines file, anonymised concurrently against one shared service, and
//! written back out as JSON lines.

use super::{build_service, load_or_default};
use crate::anonymisation::{AnonymisationService, AnonymisedEntry, BatchReport, JournalEntry};
use crate::{log_batch_complete, log_batch_progress};
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON-lines file of `{"id", "text"}` entries
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write sanitised entries (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the batch report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Parse JSON-lines input; blank lines are skipped
pub fn parse_entries(content: &str) -> anyhow::Result<Vec<JournalEntry>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid journal entry on line {}", number + 1))
        })
        .collect()
}

/// Render sanitised entries as JSON lines
pub fn render_entries(entries: &[AnonymisedEntry]) -> anyhow::Result<String> {
    let mut out = String::new();
    for entry in entries {
        let line = serde_json::json!({
            "id": entry.id,
            "sanitised_text": entry.sanitised_text,
            "replacements": entry.replacements,
        });
        out.push_str(&serde_json::to_string(&line)?);
        out.push('\n');
    }
    Ok(out)
}

/// Anonymise entries concurrently, at most `parallelism` at a time
///
/// Output keeps input order. Failed entries are left out of the output and
/// recorded as report warnings.
pub async fn run_batch(
    service: Arc<AnonymisationService>,
    entries: Vec<JournalEntry>,
    parallelism: usize,
) -> anyhow::Result<(Vec<AnonymisedEntry>, BatchReport)> {
    let total = entries.len();
    let semaphore = Arc::new(Semaphore::new(parallelism.max(1)));
    let mut tasks = JoinSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        let service = service.clone();
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let outcome = service.anonymise_entry(&entry);
            (index, entry.id, outcome)
        });
    }

    let mut slots: Vec<Option<AnonymisedEntry>> = vec![None; total];
    let mut report = BatchReport::new(service.ner_available());
    let mut done = 0usize;

    while let Some(joined) = tasks.join_next().await {
        let (index, id, outcome) = joined.context("Anonymisation task panicked")?;
        match outcome {
            Ok(entry) => slots[index] = Some(entry),
            Err(e) => {
                tracing::error!(entry_id = %id, error = %e, "Failed to anonymise entry");
                report.add_failure(&id, &e.to_string());
            }
        }
        done += 1;
        log_batch_progress!(done, total);
    }

    let results: Vec<AnonymisedEntry> = slots.into_iter().flatten().collect();
    for entry in &results {
        report.add_entry(entry);
    }

    Ok((results, report))
}

impl BatchArgs {
    /// Execute the batch command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting batch anonymisation");

        let config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let entries = match self.read_entries().await {
            Ok(e) => e,
            Err(e) => {
                eprintln!("❌ Failed to read batch input");
                eprintln!("   Error: {e:#}");
                return Ok(5);
            }
        };

        let service = match build_service(&config) {
            Ok(s) => Arc::new(s),
            Err(code) => return Ok(code),
        };

        let start = Instant::now();
        let (results, report) =
            run_batch(service, entries, config.batch.parallelism).await?;
        log_batch_complete!(results.len(), report.failed_entries, start.elapsed());

        let rendered = render_entries(&results)?;
        match self.output {
            Some(ref path) => tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => print!("{rendered}"),
        }

        eprintln!("{}", report.format_console());

        if let Some(ref path) = self.report {
            write_report(&report, path)?;
            eprintln!("📄 Report written to {}", path.display());
        }

        Ok(0)
    }

    async fn read_entries(&self) -> anyhow::Result<Vec<JournalEntry>> {
        let content = tokio::fs::read_to_string(&self.input)
            .await
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        parse_entries(&content)
    }
}

fn write_report(report: &BatchReport, path: &Path) -> anyhow::Result<()> {
    report
        .write_to_file(path)
        .with_context(|| format!("Failed to write report {}", path.display()))
}
