//! transfer edges between the routes of two stations linked by a transfer rule.
use std::collections::HashMap;

use itertools::Itertools;

use super::{transfer_ops, TransferRule, TransitEdge, TransitNode};

/// for each transfer rule between two different stations, connects every
/// ordered pair of nodes drawn from both stations. the rule's time applies
/// when changing routes, same-route pairs get the baseline.
///
/// a rule whose stations have no nodes yields no edges.
pub fn build_inter_station_edges(
    nodes: &[TransitNode],
    rules: &[TransferRule],
    base_transfer_time: f64,
) -> Vec<TransitEdge> {
    let mut stations: HashMap<&str, Vec<&TransitNode>> = HashMap::new();
    for node in nodes.iter() {
        if let Some(station) = node.parent_station() {
            stations.entry(station).or_default().push(node);
        }
    }

    rules
        .iter()
        .filter(|rule| rule.is_interchange())
        .flat_map(|rule| rule_edges(rule, &stations, base_transfer_time))
        .collect()
}

fn rule_edges(
    rule: &TransferRule,
    stations: &HashMap<&str, Vec<&TransitNode>>,
    base_transfer_time: f64,
) -> Vec<TransitEdge> {
    let members: Vec<&TransitNode> = [rule.from_stop.as_str(), rule.to_stop.as_str()]
        .iter()
        .filter_map(|s| stations.get(s))
        .flatten()
        .copied()
        .collect();
    if members.len() < 2 {
        log::debug!(
            "transfer ({}, {}) matches {} nodes, no edges created",
            rule.from_stop,
            rule.to_stop,
            members.len()
        );
    }
    members
        .iter()
        .permutations(2)
        .map(|pair| {
            let (src, dst) = (*pair[0], *pair[1]);
            let weight = transfer_ops::transfer_time(
                src,
                dst,
                rule.min_transfer_time,
                base_transfer_time,
            );
            transfer_ops::transfer_edge(src, dst, weight)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::transfer_ops::test_util::{find, node};

    #[test]
    fn test_rule_between_different_routes() {
        let x = node("1", "101", Some("S1"));
        let y = node("2", "201", Some("S2"));
        let rules = vec![TransferRule::new("S1", "S2", Some(120.0 / 60.0))];
        let edges = build_inter_station_edges(&[x.clone(), y.clone()], &rules, 5.0);
        assert_eq!(edges.len(), 2);
        assert_eq!(find(&edges, &x, &y)[0].weight, 2.0);
        assert_eq!(find(&edges, &y, &x)[0].weight, 2.0);
    }

    #[test]
    fn test_same_route_across_stations_gets_baseline() {
        let x = node("1", "101", Some("S1"));
        let x2 = node("1", "201", Some("S2"));
        let y = node("2", "202", Some("S2"));
        let rules = vec![TransferRule::new("S1", "S2", Some(3.0))];
        let edges = build_inter_station_edges(&[x.clone(), x2.clone(), y.clone()], &rules, 5.0);
        // combined node set of both stations, all ordered pairs
        assert_eq!(edges.len(), 6);
        assert_eq!(find(&edges, &x, &x2)[0].weight, 5.0);
        assert_eq!(find(&edges, &x2, &x)[0].weight, 5.0);
        assert_eq!(find(&edges, &x, &y)[0].weight, 3.0);
        assert_eq!(find(&edges, &x2, &y)[0].weight, 3.0);
    }

    #[test]
    fn test_self_rules_and_unmatched_stations_yield_nothing() {
        let x = node("1", "101", Some("S1"));
        let y = node("2", "102", Some("S1"));
        let rules = vec![
            TransferRule::new("S1", "S1", Some(3.0)),
            TransferRule::new("S8", "S9", Some(3.0)),
        ];
        let edges = build_inter_station_edges(&[x, y], &rules, 2.0);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_rule_without_time_uses_baseline() {
        let x = node("1", "101", Some("S1"));
        let y = node("2", "201", Some("S2"));
        let rules = vec![TransferRule::new("S1", "S2", None)];
        let edges = build_inter_station_edges(&[x.clone(), y.clone()], &rules, 2.5);
        assert_eq!(find(&edges, &x, &y)[0].weight, 2.5);
    }

    #[test]
    fn test_each_rule_processed_independently() {
        let x = node("1", "101", Some("S1"));
        let y = node("2", "201", Some("S2"));
        let rules = vec![
            TransferRule::new("S1", "S2", Some(3.0)),
            TransferRule::new("S2", "S1", Some(4.0)),
        ];
        let edges = build_inter_station_edges(&[x.clone(), y.clone()], &rules, 2.0);
        let weights: Vec<f64> = find(&edges, &x, &y).iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![3.0, 4.0]);
    }
}
