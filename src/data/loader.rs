use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::model::{StationDataset, StationRecord, TrafficDataset, TrafficRecord};

/// Both source files use `;` as field separator.
const DELIMITER: u8 = b';';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the annual traffic file.
///
/// Required columns: `Station`, `Réseau`, `Trafic`, `Ville`.
pub fn load_traffic(path: &Path) -> Result<TrafficDataset> {
    let file = open(path)?;
    let dataset = read_traffic(file).with_context(|| format!("loading {}", path.display()))?;
    log::info!("Loaded {} traffic rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load the station location file.
///
/// Required columns: `nom`, `exploitant`, `ligne`, `Geo Point`.
pub fn load_stations(path: &Path) -> Result<StationDataset> {
    let file = open(path)?;
    let dataset = read_stations(file).with_context(|| format!("loading {}", path.display()))?;
    log::info!("Loaded {} stations from {}", dataset.len(), path.display());
    Ok(dataset)
}

pub fn read_traffic<R: Read>(reader: R) -> Result<TrafficDataset> {
    let records = read_records::<R, TrafficRecord>(reader)?;
    Ok(TrafficDataset { records })
}

pub fn read_stations<R: Read>(reader: R) -> Result<StationDataset> {
    let records = read_records::<R, StationRecord>(reader)?;
    Ok(StationDataset { records })
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

/// Deserialize every row, stopping at the first malformed one.
fn read_records<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_reader(reader);

    reader.headers().context("reading CSV headers")?;

    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}
