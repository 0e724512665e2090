//! synthesizes the transfer edges of a canonical transit graph.
use std::time::Instant;

use super::{
    inter_station_ops, intra_station_ops, transfer_rule_ops, wait_time_ops::HeadwayIndex,
    TransferConfig, TransferRule, TransitDiagnostics, TransitEdge, TransitGraphError, TransitNode,
};

/// builds all transfer edges for a node table.
///
/// runs in order:
///   1. validation of transfer times, then reconciliation of the transfers
///      table against the node table's stations
///   2. transfers between the routes of each parent station
///   3. transfers between the routes of stations linked by a transfer rule
///   4. expected wait time at the destination added to each transfer edge
///
/// the scheduled edges are only read to estimate headways.
pub fn build_transfer_edges(
    nodes: &[TransitNode],
    scheduled_edges: &[TransitEdge],
    rules: &[TransferRule],
    config: &TransferConfig,
) -> Result<(Vec<TransitEdge>, TransitDiagnostics), TransitGraphError> {
    let start_time = Instant::now();
    let base_transfer_time = config.base_transfer_time;

    let (rules, time_diagnostics) = transfer_rule_ops::validate_transfer_times(rules);
    let (rules, rule_diagnostics) =
        transfer_rule_ops::reconcile_transfer_rules(&rules, nodes, &config.station_remapping);

    let (intra_edges, error_nodes) =
        intra_station_ops::build_intra_station_edges(nodes, &rules, base_transfer_time);
    log::info!(
        "built {} intra-station transfer edges in {:.2} seconds",
        intra_edges.len(),
        start_time.elapsed().as_secs_f64()
    );

    let inter_start_time = Instant::now();
    let inter_edges =
        inter_station_ops::build_inter_station_edges(nodes, &rules, base_transfer_time);
    log::info!(
        "built {} inter-station transfer edges in {:.2} seconds",
        inter_edges.len(),
        inter_start_time.elapsed().as_secs_f64()
    );

    let wait_start_time = Instant::now();
    let headways = HeadwayIndex::new(scheduled_edges);
    let transfer_edges = intra_edges.into_iter().chain(inter_edges).collect();
    let (transfer_edges, missing_headways) =
        headways.add_expected_wait_times(transfer_edges, config.missing_headway_policy)?;
    log::info!(
        "adding headway wait time took {:.2} seconds",
        wait_start_time.elapsed().as_secs_f64()
    );

    let diagnostics = time_diagnostics.merge(rule_diagnostics).merge(TransitDiagnostics {
        error_nodes,
        missing_headways,
        ..Default::default()
    });
    log::info!(
        "built {} transfer edges in {:.2} seconds",
        transfer_edges.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok((transfer_edges, diagnostics))
}

/// the base weight of a transfer between two nodes: the feed-provided time
/// applies only when changing routes, reboarding the same route costs the
/// baseline.
pub fn transfer_time(
    src: &TransitNode,
    dst: &TransitNode,
    min_transfer_time: Option<f64>,
    base_transfer_time: f64,
) -> f64 {
    match min_transfer_time {
        Some(t) if !src.node_id.same_route(&dst.node_id) => t,
        _ => base_transfer_time,
    }
}

/// creates the transfer edge from `src` to `dst`.
pub fn transfer_edge(src: &TransitNode, dst: &TransitNode, weight: f64) -> TransitEdge {
    TransitEdge::transfer(
        src.node_id.clone(),
        dst.node_id.clone(),
        weight,
        &src.agency_id,
        &src.network_type,
    )
}
