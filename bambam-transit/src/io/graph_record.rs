//! row formats of exported graph files. endpoint and identifier columns
//! use the headers expected by Gephi (`Id`, `Source`, `Target`).
use serde::{Deserialize, Serialize};

use crate::graph::{AveragedEdge, NodeKey, RouteType, TransitEdge, TransitNode};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(rename = "Id")]
    pub id: NodeKey,
    pub route_id: String,
    pub stop_id: String,
    pub parent_station: Option<String>,
    pub agency_id: String,
    pub network_type: String,
    pub stop_name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl From<&TransitNode> for NodeRecord {
    fn from(node: &TransitNode) -> Self {
        NodeRecord {
            id: node.node_id.clone(),
            route_id: node.node_id.route_id.clone(),
            stop_id: node.node_id.stop_id.clone(),
            parent_station: node.parent_station.clone(),
            agency_id: node.agency_id.clone(),
            network_type: node.network_type.clone(),
            stop_name: node.stop_name.clone(),
            x: node.x,
            y: node.y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "Source")]
    pub from_id: NodeKey,
    #[serde(rename = "Target")]
    pub to_id: NodeKey,
    pub weight: f64,
    pub agency_id: String,
    pub route_type: RouteType,
    pub network_type: String,
}

impl From<&TransitEdge> for EdgeRecord {
    fn from(edge: &TransitEdge) -> Self {
        EdgeRecord {
            from_id: edge.from_id.clone(),
            to_id: edge.to_id.clone(),
            weight: edge.weight,
            agency_id: edge.agency_id.clone(),
            route_type: edge.route_type.clone(),
            network_type: edge.network_type.clone(),
        }
    }
}

impl From<EdgeRecord> for TransitEdge {
    fn from(record: EdgeRecord) -> Self {
        TransitEdge {
            from_id: record.from_id,
            to_id: record.to_id,
            weight: record.weight,
            route_type: record.route_type,
            agency_id: record.agency_id,
            network_type: record.network_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AveragedEdgeRecord {
    #[serde(rename = "Source")]
    pub from_id: NodeKey,
    #[serde(rename = "Target")]
    pub to_id: NodeKey,
    pub agency_id: String,
    pub route_type: RouteType,
    pub network_type: String,
    pub total_trips: usize,
    pub weight: f64,
}

impl From<&AveragedEdge> for AveragedEdgeRecord {
    fn from(averaged: &AveragedEdge) -> Self {
        let edge = &averaged.edge;
        AveragedEdgeRecord {
            from_id: edge.from_id.clone(),
            to_id: edge.to_id.clone(),
            agency_id: edge.agency_id.clone(),
            route_type: edge.route_type.clone(),
            network_type: edge.network_type.clone(),
            total_trips: averaged.trip_count,
            weight: edge.weight,
        }
    }
}
