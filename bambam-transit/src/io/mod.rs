mod graph_record;
mod read_ops;
mod write_ops;

pub use graph_record::{AveragedEdgeRecord, EdgeRecord, NodeRecord};
pub use read_ops::{read_edge_records, read_feed_edges, read_feed_nodes, read_rows, read_transfer_rules};
pub use write_ops::{output_filename, write_averaged_edges, write_edges, write_nodes};
