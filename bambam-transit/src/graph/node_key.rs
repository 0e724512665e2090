use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::graph::TransitGraphError;

/// separates the route and stop components of a [`NodeKey`] when written
/// as a single token. GTFS IDs may contain any UTF-8 characters, so a
/// multi-character separator is used to keep the split unambiguous in practice.
/// see [https://gtfs.org/documentation/schedule/reference/#field-types].
pub const NODE_KEY_SEPARATOR: &str = "::";

/// the generic `{agency, stop}` identifier used by the upstream feed loader.
/// many services may share one of these at a busy stop.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopKey {
    pub agency_id: String,
    pub stop_id: String,
}

impl StopKey {
    pub fn new(agency_id: &str, stop_id: &str) -> Self {
        Self {
            agency_id: agency_id.to_string(),
            stop_id: stop_id.to_string(),
        }
    }
}

impl Display for StopKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.agency_id, NODE_KEY_SEPARATOR, self.stop_id)
    }
}

/// the canonical `{route, stop}` identifier of a transit graph node. each
/// route running through a physical stop gets its own node.
///
/// written as `route_id::stop_id` and parsed by splitting on the first
/// separator, so a `route_id` must not contain [`NODE_KEY_SEPARATOR`]. the
/// `stop_id` may.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub route_id: String,
    pub stop_id: String,
}

impl NodeKey {
    pub fn new(route_id: &str, stop_id: &str) -> Self {
        Self {
            route_id: route_id.to_string(),
            stop_id: stop_id.to_string(),
        }
    }

    /// true when both nodes are served by the same route.
    pub fn same_route(&self, other: &NodeKey) -> bool {
        self.route_id == other.route_id
    }
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.route_id, NODE_KEY_SEPARATOR, self.stop_id)
    }
}

impl FromStr for NodeKey {
    type Err = TransitGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(NODE_KEY_SEPARATOR) {
            Some((route_id, stop_id)) if !route_id.is_empty() && !stop_id.is_empty() => {
                Ok(NodeKey::new(route_id, stop_id))
            }
            _ => Err(TransitGraphError::InvalidNodeKey(s.to_string())),
        }
    }
}

impl Serialize for NodeKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NodeKey::from_str(&s).map_err(serde::de::Error::custom)
    }
}
