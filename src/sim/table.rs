//! Input collaborator: comma-separated process tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::core::{ProcessRecord, Ticks};
use crate::error::SimError;

pub fn read_process_table(path: &Path) -> Result<Vec<ProcessRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading process table {}", path.display()))?;
    parse_process_table(&raw)
}

// One record per `name,arrival,service` line. Rows missing an arrival or
// service field are skipped; a field that is present but not a non-negative
// integer is fatal.
pub fn parse_process_table(raw: &str) -> Result<Vec<ProcessRecord>> {
    let mut records = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        let name = fields.next().unwrap_or("");
        let arrival = fields.next().unwrap_or("");
        let service = fields.next().unwrap_or("");
        if arrival.is_empty() || service.is_empty() {
            warn!(line = idx + 1, "skipping row with missing arrival or service");
            continue;
        }
        let arrival: Ticks = arrival
            .parse()
            .map_err(|_| SimError::InvalidField(idx + 1, "arrival", arrival.to_string()))?;
        let service: Ticks = service
            .parse()
            .map_err(|_| SimError::InvalidField(idx + 1, "service", service.to_string()))?;
        records.push(ProcessRecord::new(name, arrival, service));
    }
    Ok(records)
}
