use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::NodeKey;

/// service category of an edge. scheduled edges carry the feed's route
/// type, synthesized transfer edges carry the literal `transfer`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RouteType {
    Service(String),
    Transfer,
}

impl RouteType {
    pub const TRANSFER: &'static str = "transfer";

    pub fn is_transfer(&self) -> bool {
        matches!(self, RouteType::Transfer)
    }
}

impl From<String> for RouteType {
    fn from(value: String) -> Self {
        if value == RouteType::TRANSFER {
            RouteType::Transfer
        } else {
            RouteType::Service(value)
        }
    }
}

impl From<RouteType> for String {
    fn from(value: RouteType) -> Self {
        match value {
            RouteType::Service(s) => s,
            RouteType::Transfer => String::from(RouteType::TRANSFER),
        }
    }
}

impl Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteType::Service(s) => write!(f, "{s}"),
            RouteType::Transfer => write!(f, "{}", RouteType::TRANSFER),
        }
    }
}

/// a row of the time-expanded scheduled edge table produced by the
/// upstream feed loader. endpoints are `{agency, stop}` identifiers,
/// the row's route tells which service traverses it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedEdge {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub agency_id: String,
    pub route_id: String,
    /// travel time in minutes
    pub weight: f64,
    pub route_type: String,
    pub network_type: String,
}

/// a directed, weighted edge between two transit graph nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitEdge {
    pub from_id: NodeKey,
    pub to_id: NodeKey,
    /// time cost in minutes, never negative
    pub weight: f64,
    pub route_type: RouteType,
    pub agency_id: String,
    pub network_type: String,
}

impl TransitEdge {
    /// creates a transfer edge between two nodes. agency and network type
    /// are taken from the boarding (source) side of the transfer.
    pub fn transfer(
        from_id: NodeKey,
        to_id: NodeKey,
        weight: f64,
        agency_id: &str,
        network_type: &str,
    ) -> Self {
        Self {
            from_id,
            to_id,
            weight,
            route_type: RouteType::Transfer,
            agency_id: agency_id.to_string(),
            network_type: network_type.to_string(),
        }
    }
}

/// a static edge summarizing every time-expanded edge sharing its
/// endpoints, agency, route type and network type.
#[derive(Clone, Debug, PartialEq)]
pub struct AveragedEdge {
    /// the representative edge, weighted by the mean of the group
    pub edge: TransitEdge,
    pub trip_count: usize,
}

impl AveragedEdge {
    pub fn into_edge(self) -> TransitEdge {
        self.edge
    }
}
