//! collapses a time-expanded edge table into a static, averaged one.
use std::collections::HashMap;

use super::{AveragedEdge, NodeKey, RouteType, TransitEdge};

/// edges in the same group are the same static edge at different times.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct AggregationKey<'a> {
    from_id: &'a NodeKey,
    to_id: &'a NodeKey,
    agency_id: &'a str,
    route_type: &'a RouteType,
    network_type: &'a str,
}

impl<'a> From<&'a TransitEdge> for AggregationKey<'a> {
    fn from(edge: &'a TransitEdge) -> Self {
        Self {
            from_id: &edge.from_id,
            to_id: &edge.to_id,
            agency_id: &edge.agency_id,
            route_type: &edge.route_type,
            network_type: &edge.network_type,
        }
    }
}

/// groups edges by endpoints, agency, route type and network type, and
/// emits one edge per group weighted by the group's mean weight, with the
/// group size as its trip count. groups appear in order of their first edge.
///
/// aggregating edges that are already unique returns them unchanged, each
/// with a trip count of 1.
pub fn aggregate_edges(edges: &[TransitEdge]) -> Vec<AveragedEdge> {
    let mut group_index: HashMap<AggregationKey, usize> = HashMap::new();
    let mut groups: Vec<(&TransitEdge, f64, usize)> = vec![];
    for edge in edges.iter() {
        match group_index.get(&AggregationKey::from(edge)) {
            Some(idx) => {
                let (_, sum, count) = &mut groups[*idx];
                *sum += edge.weight;
                *count += 1;
            }
            None => {
                group_index.insert(AggregationKey::from(edge), groups.len());
                groups.push((edge, edge.weight, 1));
            }
        }
    }
    log::info!(
        "averaged {} time-expanded edges into {} static edges",
        edges.len(),
        groups.len()
    );

    groups
        .into_iter()
        .map(|(first, sum, trip_count)| AveragedEdge {
            edge: TransitEdge {
                weight: sum / trip_count as f64,
                ..first.clone()
            },
            trip_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::transfer_ops::test_util::{node, scheduled};
    use crate::graph::transfer_ops::transfer_edge;

    fn time_expanded() -> Vec<TransitEdge> {
        let a = node("1", "101", Some("S1"));
        let b = node("1", "102", Some("S2"));
        let c = node("2", "102", Some("S2"));
        vec![
            scheduled(&a, &b, 3.0),
            scheduled(&a, &b, 4.0),
            scheduled(&b, &a, 2.5),
            scheduled(&a, &b, 5.5),
            transfer_edge(&b, &c, 4.0),
            transfer_edge(&b, &c, 6.0),
        ]
    }

    #[test]
    fn test_groups_are_averaged_with_trip_counts() {
        let averaged = aggregate_edges(&time_expanded());
        assert_eq!(averaged.len(), 3);
        assert_eq!(averaged[0].trip_count, 3);
        assert!((averaged[0].edge.weight - 12.5 / 3.0).abs() < 1e-9);
        assert_eq!(averaged[1].trip_count, 1);
        assert_eq!(averaged[1].edge.weight, 2.5);
        assert_eq!(averaged[2].trip_count, 2);
        assert_eq!(averaged[2].edge.weight, 5.0);
        assert!(averaged[2].edge.route_type.is_transfer());
    }

    #[test]
    fn test_mean_times_count_preserves_group_weight() {
        let edges = time_expanded();
        for averaged in aggregate_edges(&edges) {
            let total: f64 = edges
                .iter()
                .filter(|e| AggregationKey::from(*e) == AggregationKey::from(&averaged.edge))
                .map(|e| e.weight)
                .sum();
            let restored = averaged.edge.weight * averaged.trip_count as f64;
            assert!((restored - total).abs() < 1e-9);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let once: Vec<TransitEdge> = aggregate_edges(&time_expanded())
            .into_iter()
            .map(AveragedEdge::into_edge)
            .collect();
        let twice = aggregate_edges(&once);
        assert_eq!(twice.len(), once.len());
        for (edge, averaged) in once.iter().zip(twice.iter()) {
            assert_eq!(averaged.trip_count, 1);
            assert_eq!(&averaged.edge, edge);
        }
    }

    #[test]
    fn test_route_type_separates_groups() {
        let a = node("1", "101", Some("S1"));
        let b = node("1", "102", Some("S2"));
        let mut express = scheduled(&a, &b, 3.0);
        express.route_type = RouteType::Service(String::from("2"));
        let averaged = aggregate_edges(&[scheduled(&a, &b, 5.0), express]);
        assert_eq!(averaged.len(), 2);
    }
}
