//! Whole-table persistence of the inventory as CSV.
//!
//! The file holds a header row followed by one row per record in table
//! order. Fields are never trimmed, so every table loads back exactly as it
//! was saved.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};
use tempfile::NamedTempFile;

use crate::error::{InventoryError, InventoryResult};
use crate::record::Record;

pub const DEFAULT_FILE_NAME: &str = "CDInventory.csv";

const HEADERS: [&str; 3] = ["ID", "Title", "Artist"];

/// Read the whole inventory stored at `path`.
///
/// Nothing is returned unless every row deserializes.
pub fn load(path: &Path) -> InventoryResult<Vec<Record>> {
    match read_records(path) {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        Err(source) => {
            info!("Unable to load {}: {source}", path.display());
            Err(InventoryError::FileUnavailable {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Replace the inventory stored at `path` with `records`.
pub fn save(path: &Path, records: &[Record]) -> InventoryResult<()> {
    match write_records(path, records) {
        Ok(()) => {
            info!("Saved {} records to {}", records.len(), path.display());
            Ok(())
        }
        Err(source) => {
            warn!("Unable to save {}: {source}", path.display());
            Err(InventoryError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn read_records(path: &Path) -> csv::Result<Vec<Record>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    // Every saved inventory starts with the exact header, even when empty.
    if !reader.headers()?.iter().eq(HEADERS) {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "missing inventory header").into());
    }
    let records = reader.deserialize().collect::<csv::Result<Vec<Record>>>()?;
    Ok(records)
}

// The temporary file lives next to the target so the final rename stays on
// one filesystem. A symlinked target is replaced by a regular file.
fn write_records(path: &Path, records: &[Record]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = NamedTempFile::new_in(dir)?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
