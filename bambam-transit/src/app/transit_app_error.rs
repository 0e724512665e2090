use thiserror::Error;

use crate::graph::TransitGraphError;

#[derive(Error, Debug)]
pub enum TransitAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, String),
    #[error("failure building transit graph: {source}")]
    TransitGraphError {
        #[from]
        source: TransitGraphError,
    },
    #[error("failure accessing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
