//! assembles a transit network graph with transfer edges from the tables
//! produced by a GTFS feed loader.
use bambam_transit::app::TransitApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TransitApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("bambam-transit failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
