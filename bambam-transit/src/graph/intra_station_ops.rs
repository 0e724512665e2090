//! transfer edges between the routes serving a single parent station.
use std::collections::VecDeque;

use itertools::Itertools;

use super::{transfer_ops, TransferRule, TransitEdge, TransitNode};

/// builds the directed transfer edges between every pair of nodes sharing a
/// parent station, returning them along with the nodes that have no parent
/// station (which are reported rather than connected).
///
/// stations are visited one at a time in order of first appearance; all
/// nodes of a station are removed from the working set before the next
/// station is selected.
pub fn build_intra_station_edges(
    nodes: &[TransitNode],
    rules: &[TransferRule],
    base_transfer_time: f64,
) -> (Vec<TransitEdge>, Vec<TransitNode>) {
    let mut working: VecDeque<&TransitNode> = nodes.iter().collect();
    let mut edges: Vec<TransitEdge> = vec![];
    let mut error_nodes: Vec<TransitNode> = vec![];

    while let Some(pivot) = working.pop_front() {
        let Some(station) = pivot.parent_station() else {
            error_nodes.push(pivot.clone());
            continue;
        };
        let (members, rest): (VecDeque<&TransitNode>, VecDeque<&TransitNode>) = working
            .into_iter()
            .partition(|n| n.parent_station() == Some(station));
        working = rest;

        let group: Vec<&TransitNode> = std::iter::once(pivot).chain(members).collect();
        let station_edges = station_edges(station, &group, rules, base_transfer_time);
        log::debug!(
            "station '{station}' has {} nodes, {} transfer edges",
            group.len(),
            station_edges.len()
        );
        edges.extend(station_edges);
    }

    if !error_nodes.is_empty() {
        log::warn!(
            "{} nodes have an empty parent_station, skipped when building transfer edges",
            error_nodes.len()
        );
    }
    (edges, error_nodes)
}

/// the minimum transfer time the transfers table lists for transfers from a
/// station: the first rule whose `from_stop` is the station, wherever it
/// leads. a later self rule (`from_stop == to_stop`) does not override it.
pub fn station_transfer_time(station: &str, rules: &[TransferRule]) -> Option<f64> {
    rules
        .iter()
        .find(|r| r.from_stop == station)
        .and_then(|r| r.min_transfer_time)
}

/// all ordered pairs of a station's nodes.
///
/// with exactly two nodes they are taken to be the inbound and outbound
/// services of one line and both directions get the station's transfer time.
/// with more, the station time only applies between different routes.
fn station_edges(
    station: &str,
    group: &[&TransitNode],
    rules: &[TransferRule],
    base_transfer_time: f64,
) -> Vec<TransitEdge> {
    if group.len() < 2 {
        return vec![];
    }
    let min_transfer_time = station_transfer_time(station, rules);
    group
        .iter()
        .permutations(2)
        .map(|pair| {
            let (src, dst) = (*pair[0], *pair[1]);
            let weight = if group.len() == 2 {
                min_transfer_time.unwrap_or(base_transfer_time)
            } else {
                transfer_ops::transfer_time(src, dst, min_transfer_time, base_transfer_time)
            };
            transfer_ops::transfer_edge(src, dst, weight)
        })
        .collect()
}
