//! expected wait time of a transfer, from the headways of the service boarded.
//!
//! riders are assumed to arrive uniformly, so the expected wait for a
//! service with headway `H` is `H / 2`. the headway into a node is
//! approximated by the mean weight of the scheduled edges arriving there,
//! which also holds once a time-expanded graph has been averaged.
use std::collections::{HashMap, HashSet};

use super::{MissingHeadwayPolicy, NodeKey, TransitEdge, TransitGraphError};

/// mean scheduled arrival weight for each destination node.
pub struct HeadwayIndex {
    mean_weights: HashMap<NodeKey, f64>,
}

impl HeadwayIndex {
    /// indexes all scheduled (non-transfer) edges by destination.
    pub fn new(scheduled_edges: &[TransitEdge]) -> Self {
        let mut totals: HashMap<&NodeKey, (f64, usize)> = HashMap::new();
        for edge in scheduled_edges.iter().filter(|e| !e.route_type.is_transfer()) {
            let entry = totals.entry(&edge.to_id).or_insert((0.0, 0));
            entry.0 += edge.weight;
            entry.1 += 1;
        }
        let mean_weights = totals
            .into_iter()
            .map(|(node, (sum, count))| (node.clone(), sum / count as f64))
            .collect();
        Self { mean_weights }
    }

    /// half of the mean scheduled weight into `node`, or None when no
    /// scheduled edge arrives there.
    pub fn expected_wait(&self, node: &NodeKey) -> Option<f64> {
        self.mean_weights.get(node).map(|mean| mean / 2.0)
    }

    /// adds the expected wait at each transfer destination to the transfer
    /// weight. returns the updated edges and the destinations that had no
    /// headway to estimate from, listed once each.
    ///
    /// # Errors
    ///
    /// with [`MissingHeadwayPolicy::Fail`], the first destination without
    /// scheduled arrivals aborts with [`TransitGraphError::MissingHeadway`].
    /// with [`MissingHeadwayPolicy::DropEdge`] the edge is removed instead.
    pub fn add_expected_wait_times(
        &self,
        transfer_edges: Vec<TransitEdge>,
        policy: MissingHeadwayPolicy,
    ) -> Result<(Vec<TransitEdge>, Vec<NodeKey>), TransitGraphError> {
        let mut missing: Vec<NodeKey> = vec![];
        let mut seen: HashSet<NodeKey> = HashSet::new();
        let mut result: Vec<TransitEdge> = Vec::with_capacity(transfer_edges.len());
        for mut edge in transfer_edges.into_iter() {
            match (self.expected_wait(&edge.to_id), policy) {
                (Some(wait), _) => {
                    edge.weight += wait;
                    result.push(edge);
                }
                (None, MissingHeadwayPolicy::Fail) => {
                    return Err(TransitGraphError::MissingHeadway(edge.to_id));
                }
                (None, MissingHeadwayPolicy::DropEdge) => {
                    if seen.insert(edge.to_id.clone()) {
                        missing.push(edge.to_id);
                    }
                }
            }
        }
        Ok((result, missing))
    }
}
