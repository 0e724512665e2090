mod diagnostics;
mod graph_error;
mod missing_headway_policy;
mod node_key;
mod station_remap;
mod transfer_config;
mod transfer_rule;
mod transit_edge;
mod transit_graph;
mod transit_node;

pub mod aggregate_ops;
pub mod canonicalize_ops;
pub mod inter_station_ops;
pub mod intra_station_ops;
pub mod transfer_ops;
pub mod transfer_rule_ops;
pub mod wait_time_ops;

pub use diagnostics::TransitDiagnostics;
pub use graph_error::TransitGraphError;
pub use missing_headway_policy::MissingHeadwayPolicy;
pub use node_key::{NodeKey, StopKey, NODE_KEY_SEPARATOR};
pub use station_remap::StationRemap;
pub use transfer_config::{TransferConfig, DEFAULT_BASE_TRANSFER_TIME};
pub use transfer_rule::{TransferRule, TransferRuleRow};
pub use transit_edge::{AveragedEdge, FeedEdge, RouteType, TransitEdge};
pub use transit_graph::TransitGraph;
pub use transit_node::{FeedNode, TransitNode};
