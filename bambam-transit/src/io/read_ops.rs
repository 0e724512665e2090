use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use super::EdgeRecord;
use crate::{
    app::TransitAppError,
    graph::{FeedEdge, FeedNode, TransferRule, TransferRuleRow, TransitEdge},
};

/// reads every row of a CSV file with headers. files ending in `.gz` are
/// decompressed while reading.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TransitAppError> {
    let filename = path.to_string_lossy().to_string();
    let file = File::open(path).map_err(|e| {
        TransitAppError::CsvReadError(filename.clone(), csv::Error::from(e))
    })?;
    let source: Box<dyn Read> = if filename.ends_with(".gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| TransitAppError::CsvReadError(filename.clone(), e))?;
    log::info!("read {} rows from {filename}", rows.len());
    Ok(rows)
}

/// reads the feed loader's stop table.
pub fn read_feed_nodes(path: &Path) -> Result<Vec<FeedNode>, TransitAppError> {
    read_rows(path)
}

/// reads the feed loader's time-expanded scheduled edge table.
pub fn read_feed_edges(path: &Path) -> Result<Vec<FeedEdge>, TransitAppError> {
    read_rows(path)
}

/// reads a GTFS `transfers.txt` file, converting transfer times to minutes.
pub fn read_transfer_rules(path: &Path) -> Result<Vec<TransferRule>, TransitAppError> {
    let rows: Vec<TransferRuleRow> = read_rows(path)?;
    Ok(rows.into_iter().map(TransferRule::from).collect())
}

/// reads an edge file previously written by [`super::write_edges`].
pub fn read_edge_records(path: &Path) -> Result<Vec<TransitEdge>, TransitAppError> {
    let rows: Vec<EdgeRecord> = read_rows(path)?;
    Ok(rows.into_iter().map(TransitEdge::from).collect())
}
