//! Vehicle catalog: built-in records plus an optional sync-file merge.

mod builtin;
mod domain;
pub mod import;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::info;

pub use domain::{BodyType, Powertrain, VehicleRecord};
pub use import::CatalogImportError;

/// Counts reported by a sync merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub added: usize,
    pub skipped: usize,
}

/// Owner of the catalog for one process. Constructed once by the caller and
/// passed by reference into the engine; the engine itself never holds it.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    vehicles: Vec<VehicleRecord>,
}

impl CatalogProvider {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            vehicles: builtin::vehicles(),
        }
    }

    /// A catalog over caller-supplied records (test fixtures, pre-merged
    /// imports). Order is preserved.
    pub fn from_records(vehicles: Vec<VehicleRecord>) -> Self {
        Self { vehicles }
    }

    /// Merge a sync payload into the catalog, deduplicating by
    /// case-insensitive trimmed name.
    pub fn merge_sync<R: Read>(&mut self, reader: R) -> Result<MergeStats, CatalogImportError> {
        let stats = import::merge_from_reader(&mut self.vehicles, reader)?;
        info!(added = stats.added, skipped = stats.skipped, "merged catalog sync records");
        Ok(stats)
    }

    /// Merge a sync file from disk.
    pub fn merge_sync_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<MergeStats, CatalogImportError> {
        let file = File::open(path)?;
        self.merge_sync(file)
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
