use itertools::Itertools;

use super::{NodeKey, StationRemap, TransferRule, TransitNode};

/// recoverable problems found while assembling the transit graph. rows
/// listed here were excluded from (or rewritten before) transfer synthesis,
/// the rest of the graph was still built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitDiagnostics {
    /// nodes without a parent station
    pub error_nodes: Vec<TransitNode>,
    /// legacy station identifiers rewritten in the transfers table
    pub remapped_stations: Vec<StationRemap>,
    /// transfer rules referencing stations that are not in the node table
    pub dropped_transfer_rules: Vec<TransferRule>,
    /// transfer rules with a negative or non-numeric minimum transfer time
    pub invalid_transfer_rules: Vec<TransferRule>,
    /// transfer destinations with no scheduled arrivals
    pub missing_headways: Vec<NodeKey>,
}

impl TransitDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.error_nodes.is_empty()
            && self.remapped_stations.is_empty()
            && self.dropped_transfer_rules.is_empty()
            && self.invalid_transfer_rules.is_empty()
            && self.missing_headways.is_empty()
    }

    /// combines the findings of two stages.
    pub fn merge(mut self, other: TransitDiagnostics) -> Self {
        self.error_nodes.extend(other.error_nodes);
        self.remapped_stations.extend(other.remapped_stations);
        self.dropped_transfer_rules
            .extend(other.dropped_transfer_rules);
        self.invalid_transfer_rules
            .extend(other.invalid_transfer_rules);
        self.missing_headways.extend(other.missing_headways);
        self
    }

    pub fn log_summary(&self) {
        if !self.error_nodes.is_empty() {
            log::warn!(
                "{} nodes have no parent_station and were excluded from transfer edges: {}",
                self.error_nodes.len(),
                self.error_nodes.iter().map(|n| &n.node_id).join(", ")
            );
        }
        if !self.remapped_stations.is_empty() {
            log::warn!(
                "rewrote legacy station ids in transfers: {}",
                self.remapped_stations
                    .iter()
                    .map(|r| format!("{} -> {}", r.deprecated, r.current))
                    .join(", ")
            );
        }
        if !self.dropped_transfer_rules.is_empty() {
            log::warn!(
                "{} transfer rules reference unknown stations and were dropped: {}",
                self.dropped_transfer_rules.len(),
                self.dropped_transfer_rules
                    .iter()
                    .map(|r| format!("({}, {})", r.from_stop, r.to_stop))
                    .join(", ")
            );
        }
        if !self.invalid_transfer_rules.is_empty() {
            log::warn!(
                "{} transfer rules have an invalid min_transfer_time and were dropped: {}",
                self.invalid_transfer_rules.len(),
                self.invalid_transfer_rules
                    .iter()
                    .map(|r| format!("({}, {}, {:?})", r.from_stop, r.to_stop, r.min_transfer_time))
                    .join(", ")
            );
        }
        if !self.missing_headways.is_empty() {
            log::warn!(
                "{} transfer destinations have no scheduled arrivals: {}",
                self.missing_headways.len(),
                self.missing_headways.iter().join(", ")
            );
        }
    }
}
