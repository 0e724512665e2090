use super::{NodeKey, StopKey};

#[derive(thiserror::Error, Debug)]
pub enum TransitGraphError {
    #[error("edge {edge_index} references endpoint '{endpoint}' which is not in the feed node table")]
    UnmatchedEndpoint { endpoint: StopKey, edge_index: usize },
    #[error("edge {edge_index} from '{from}' to '{to}' has invalid weight {weight}, must be finite and non-negative")]
    InvalidWeight {
        edge_index: usize,
        from: String,
        to: String,
        weight: f64,
    },
    #[error("edge {edge_index} has route_id '{route_id}' containing the node id separator '::'")]
    InvalidRouteId { edge_index: usize, route_id: String },
    #[error("cannot estimate wait time for transfer into '{0}': no scheduled edges arrive at this node")]
    MissingHeadway(NodeKey),
    #[error("invalid node identifier '{0}', expected '<route_id>::<stop_id>'")]
    InvalidNodeKey(String),
    #[error("{0}")]
    InternalError(String),
}
