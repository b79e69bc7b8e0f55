use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use wordfreq_core::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word: count` line per entry
    Text,
    /// A JSON array of `{ "word", "count" }` objects
    Json,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    word: &'a str,
    count: u64,
}

/// Writes the ranked entries, truncated to `top` when given.
pub fn write_entries(
    out: &mut dyn Write,
    entries: &[RankedEntry],
    top: Option<usize>,
    format: OutputFormat,
) -> io::Result<()> {
    let shown = &entries[..top.map_or(entries.len(), |n| n.min(entries.len()))];
    match format {
        OutputFormat::Text => {
            for entry in shown {
                writeln!(out, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonEntry<'_>> = shown
                .iter()
                .map(|entry| JsonEntry {
                    word: &entry.word,
                    count: entry.count,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
