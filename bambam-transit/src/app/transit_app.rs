use super::TransitOperation;
use clap::Parser;

/// command line tool for assembling transit network graphs from processed GTFS tables
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TransitApp {
    #[command(subcommand)]
    pub op: TransitOperation,
}
