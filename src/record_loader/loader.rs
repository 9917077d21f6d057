use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::error_handling::types::LoadError;
use crate::record_loader::types::Record;

/// Reads every path in order and concatenates their rows.
///
/// A file that cannot be opened or contains a malformed row is logged and skipped as a
/// whole; the remaining files still contribute. The run only fails when no path was
/// given or when nothing at all could be read.
pub fn load_records(paths: &[PathBuf]) -> Result<Vec<Record>, LoadError> {
    if paths.is_empty() {
        return Err(LoadError::NoInputFiles);
    }

    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    info!("Reading files {}", names.join(","));

    let mut records = Vec::new();
    for path in paths {
        match read_file(path) {
            Ok(mut rows) => {
                debug!("Read {} record(s) from {}", rows.len(), path.display());
                records.append(&mut rows);
            }
            Err(e) => error!("{}, skipping", e),
        }
    }

    if records.is_empty() {
        error!("No flows found!!");
        return Err(LoadError::NoRecords);
    }

    info!("Loaded {} record(s) from {} file(s)", records.len(), paths.len());
    Ok(records)
}

/// Parses one header-delimited CSV file. The handle is dropped before returning, on
/// success and on failure alike.
pub fn read_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let parse_err = |e: csv::Error| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));
    let headers = reader.headers().map_err(parse_err)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(parse_err)?;
        let record: Record = headers.iter().zip(row.iter()).collect();
        debug!("{:?}", record);
        rows.push(record);
    }
    Ok(rows)
}
