//! transit graph assembly operations for bambam-transit.
use std::path::Path;

use chrono::Local;
use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::{
    app::TransitAppError,
    config::TransitGraphConfiguration,
    graph::{aggregate_ops, TransitGraph},
    io,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TransitOperation {
    /// build the transit graph with transfer edges from the feed loader's tables
    Build {
        /// stop table with agency-qualified stops
        #[arg(long)]
        nodes_file: String,
        /// time-expanded scheduled edge table
        #[arg(long)]
        edges_file: String,
        /// GTFS transfers.txt of the feed
        #[arg(long)]
        transfers_file: String,
        #[arg(long)]
        output_directory: String,
        /// path to .toml or .json file with bambam-transit parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// write averaged edges instead of time-expanded edges
        #[arg(long, default_value_t = false)]
        aggregate: bool,
    },
    /// average a previously exported time-expanded edge file
    Aggregate {
        /// edge file written by `build` without aggregation
        #[arg(long)]
        edges_file: String,
        /// averaged edge file to write, gzipped if it ends in .gz
        #[arg(long)]
        output_file: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
}

impl TransitOperation {
    pub fn run(&self) -> Result<(), TransitAppError> {
        match self {
            TransitOperation::Build {
                nodes_file,
                edges_file,
                transfers_file,
                output_directory,
                configuration_file,
                aggregate,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(TransitGraphConfiguration::default()),
                    Some(f) => {
                        log::info!("reading bambam-transit configuration from {f}");
                        TransitGraphConfiguration::try_from(f)
                    }
                }?;
                conf.aggregate = conf.aggregate || *aggregate;
                build(
                    Path::new(nodes_file),
                    Path::new(edges_file),
                    Path::new(transfers_file),
                    Path::new(output_directory),
                    &conf,
                )
            }
            TransitOperation::Aggregate {
                edges_file,
                output_file,
                overwrite,
            } => aggregate(Path::new(edges_file), Path::new(output_file), *overwrite),
        }
    }
}

fn aggregate(edges_file: &Path, output_file: &Path, overwrite: bool) -> Result<(), TransitAppError> {
    let filename = output_file
        .file_name()
        .and_then(|f| f.to_str())
        .ok_or_else(|| {
            TransitAppError::ConfigurationError(format!(
                "output file '{}' has no valid file name",
                output_file.display()
            ))
        })?;
    let directory = output_file.parent().unwrap_or(Path::new(""));

    let edges = io::read_edge_records(edges_file)?;
    let averaged = aggregate_ops::aggregate_edges(&edges);
    let written = io::write_averaged_edges(&averaged, directory, filename, overwrite)?;
    if !written {
        log::warn!(
            "{} exists and overwrite is not set, averaged edges not written",
            output_file.display()
        );
    }
    Ok(())
}

fn build(
    nodes_file: &Path,
    edges_file: &Path,
    transfers_file: &Path,
    output_directory: &Path,
    conf: &TransitGraphConfiguration,
) -> Result<(), TransitAppError> {
    let feed_nodes = io::read_feed_nodes(nodes_file)?;
    let feed_edges = io::read_feed_edges(edges_file)?;
    let rules = io::read_transfer_rules(transfers_file)?;

    let (graph, diagnostics) =
        TransitGraph::assemble(&feed_nodes, &feed_edges, &rules, &conf.transfer_config())?;
    diagnostics.log_summary();

    let today = Local::now().date_naive();
    let nodes_filename = io::output_filename("nodes", &conf.day, &conf.time_range, &today);
    let edges_filename = io::output_filename("edges", &conf.day, &conf.time_range, &today);
    io::write_nodes(&graph.nodes, output_directory, &nodes_filename, conf.overwrite)?;
    if conf.aggregate {
        let averaged = graph.aggregate();
        io::write_averaged_edges(&averaged, output_directory, &edges_filename, conf.overwrite)?;
    } else {
        io::write_edges(&graph.edges, output_directory, &edges_filename, conf.overwrite)?;
    }
    eprintln!("finished.");
    Ok(())
}
