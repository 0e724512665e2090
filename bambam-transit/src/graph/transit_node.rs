use serde::{Deserialize, Serialize};

use super::{NodeKey, StopKey};

/// a row of the stop table produced by the upstream feed loader, keyed by
/// `{agency, stop}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedNode {
    pub stop_id: String,
    pub agency_id: String,
    pub parent_station: Option<String>,
    pub network_type: String,
    pub stop_name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl FeedNode {
    pub fn stop_key(&self) -> StopKey {
        StopKey::new(&self.agency_id, &self.stop_id)
    }
}

/// a node of the transit graph: one route serving one physical stop.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitNode {
    pub node_id: NodeKey,
    pub parent_station: Option<String>,
    pub agency_id: String,
    pub network_type: String,
    pub stop_name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl TransitNode {
    /// builds the node for `node_id`, taking every other attribute from the
    /// feed stop it was derived from.
    pub fn from_feed_node(node_id: NodeKey, feed_node: &FeedNode) -> Self {
        Self {
            node_id,
            parent_station: feed_node.parent_station.clone(),
            agency_id: feed_node.agency_id.clone(),
            network_type: feed_node.network_type.clone(),
            stop_name: feed_node.stop_name.clone(),
            x: feed_node.x,
            y: feed_node.y,
        }
    }

    pub fn route_id(&self) -> &str {
        &self.node_id.route_id
    }

    /// the physical station of this node. empty strings are treated as absent.
    pub fn parent_station(&self) -> Option<&str> {
        self.parent_station
            .as_deref()
            .filter(|station| !station.trim().is_empty())
    }
}
