use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chrono::NaiveDate;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use serde::Serialize;

use super::{AveragedEdgeRecord, EdgeRecord, NodeRecord};
use crate::{
    app::TransitAppError,
    graph::{AveragedEdge, TransitEdge, TransitNode},
};

/// name of an exported graph file, such as
/// `gtfs-edges-monday-060000-100000-20240813.csv`.
pub fn output_filename(
    kind: &str,
    day: &str,
    time_range: &(String, String),
    date: &NaiveDate,
) -> String {
    let (start, end) = time_range;
    format!(
        "gtfs-{kind}-{day}-{}-{}-{}.csv",
        start.replace(":", ""),
        end.replace(":", ""),
        date.format("%Y%m%d")
    )
}

/// writes the node table, identified by the `Id` column. returns false if
/// the file exists and `overwrite` is false.
pub fn write_nodes(
    nodes: &[TransitNode],
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<bool, TransitAppError> {
    let rows = nodes.iter().map(NodeRecord::from);
    write_records(rows, nodes.len(), directory, filename, overwrite)
}

/// writes a time-expanded edge table with `Source` and `Target` endpoint
/// columns. returns false if the file exists and `overwrite` is false.
pub fn write_edges(
    edges: &[TransitEdge],
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<bool, TransitAppError> {
    let rows = edges.iter().map(EdgeRecord::from);
    write_records(rows, edges.len(), directory, filename, overwrite)
}

/// writes an averaged edge table with `Source` and `Target` endpoint
/// columns and a `total_trips` column.
pub fn write_averaged_edges(
    edges: &[AveragedEdge],
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<bool, TransitAppError> {
    let rows = edges.iter().map(AveragedEdgeRecord::from);
    write_records(rows, edges.len(), directory, filename, overwrite)
}

fn write_records<T: Serialize>(
    rows: impl Iterator<Item = T>,
    total: usize,
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<bool, TransitAppError> {
    let Some(mut writer) =
        create_writer(directory, filename, true, QuoteStyle::Necessary, overwrite)?
    else {
        log::warn!("{filename} exists in {directory:?} and overwrite is false, skipping");
        return Ok(false);
    };

    let row_iter = tqdm!(rows, total = total, desc = format!("write {filename}"));
    for row in row_iter {
        writer.serialize(row).map_err(|e| {
            TransitAppError::CsvWriteError(filename.to_string(), e.to_string())
        })?;
    }
    eprintln!();

    writer
        .flush()
        .map_err(|e| TransitAppError::CsvWriteError(filename.to_string(), e.to_string()))?;
    Ok(true)
}

/// helper function to build a filewriter for writing either .csv or .csv.gz
/// files while respecting the user's overwrite preferences.
fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<Box<dyn Write>>>, TransitAppError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(filepath)?;
    let buffer: Box<dyn Write> = if filename.ends_with(".gz") {
        Box::new(GzEncoder::new(file, Compression::default()))
    } else {
        Box::new(BufWriter::new(file))
    };
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(Some(writer))
}
