//! Merge of externally scraped vehicle records into the catalog.
//!
//! The sync payload is a JSON list of partially-specified records (the shape
//! written by the EV-database scraper). Rows are keyed by case-insensitive
//! trimmed name; rows whose key already exists in the catalog are skipped,
//! everything else is resolved against the documented field defaults and
//! appended. The merge runs strictly before any recommendation request.

mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;

use crate::catalog::domain::VehicleRecord;
use crate::catalog::MergeStats;
use normalizer::normalize_name;

/// Failure reading or decoding a sync payload. The merge itself never fails
/// per-row; malformed rows are skipped and counted.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog sync file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog sync payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn merge_from_reader<R: Read>(
    vehicles: &mut Vec<VehicleRecord>,
    reader: R,
) -> Result<MergeStats, CatalogImportError> {
    let rows = parser::parse_records(reader)?;

    let mut seen: HashSet<String> = vehicles
        .iter()
        .map(|vehicle| normalize_name(&vehicle.name))
        .collect();
    let mut stats = MergeStats::default();

    for row in rows {
        let Some(record) = row.resolve() else {
            stats.skipped += 1;
            continue;
        };
        if !seen.insert(normalize_name(&record.name)) {
            stats.skipped += 1;
            continue;
        }
        vehicles.push(record);
        stats.added += 1;
    }

    Ok(stats)
}
