//! rewrites the feed's `{agency, stop}` tables into `{route, stop}` tables
//! so that services sharing a physical stop become distinct graph nodes.
//!
//! node identity is derived from the rewritten edges: edges are always
//! canonicalized first, then the node table is rebuilt from their endpoints.
use std::collections::{HashMap, HashSet};

use super::{
    FeedEdge, FeedNode, NodeKey, RouteType, StopKey, TransitEdge, TransitGraphError, TransitNode,
    NODE_KEY_SEPARATOR,
};

/// rewrites each edge endpoint from its agency-qualified stop to the
/// route-qualified node of the service traversing the edge.
///
/// # Errors
///
/// weights must be finite and non-negative, and route ids must not contain
/// [`NODE_KEY_SEPARATOR`] so that node ids can be parsed back.
pub fn canonicalize_edges(feed_edges: &[FeedEdge]) -> Result<Vec<TransitEdge>, TransitGraphError> {
    feed_edges
        .iter()
        .enumerate()
        .map(|(edge_index, row)| {
            if !row.weight.is_finite() || row.weight < 0.0 {
                return Err(TransitGraphError::InvalidWeight {
                    edge_index,
                    from: row.from_stop_id.clone(),
                    to: row.to_stop_id.clone(),
                    weight: row.weight,
                });
            }
            if row.route_id.contains(NODE_KEY_SEPARATOR) {
                return Err(TransitGraphError::InvalidRouteId {
                    edge_index,
                    route_id: row.route_id.clone(),
                });
            }
            Ok(TransitEdge {
                from_id: NodeKey::new(&row.route_id, &row.from_stop_id),
                to_id: NodeKey::new(&row.route_id, &row.to_stop_id),
                weight: row.weight,
                route_type: RouteType::from(row.route_type.clone()),
                agency_id: row.agency_id.clone(),
                network_type: row.network_type.clone(),
            })
        })
        .collect()
}

/// builds the node table as the closure of all endpoints of the rewritten
/// edges. each node copies its attributes from the feed stop with the same
/// agency and stop id.
///
/// nodes are ordered by first appearance as an edge source, followed by
/// nodes that only appear as an edge destination.
///
/// # Errors
///
/// an endpoint with no matching feed stop is a contract violation between
/// the loader's tables and aborts with [`TransitGraphError::UnmatchedEndpoint`].
pub fn canonicalize_nodes(
    edges: &[TransitEdge],
    feed_nodes: &[FeedNode],
) -> Result<Vec<TransitNode>, TransitGraphError> {
    let lookup: HashMap<StopKey, &FeedNode> =
        feed_nodes.iter().map(|n| (n.stop_key(), n)).collect();

    let sources = edges
        .iter()
        .enumerate()
        .map(|(idx, e)| (idx, &e.from_id, &e.agency_id));
    let destinations = edges
        .iter()
        .enumerate()
        .map(|(idx, e)| (idx, &e.to_id, &e.agency_id));

    let mut visited: HashSet<&NodeKey> = HashSet::new();
    let mut matched: HashSet<StopKey> = HashSet::new();
    let mut nodes: Vec<TransitNode> = vec![];
    for (edge_index, node_id, agency_id) in sources.chain(destinations) {
        if !visited.insert(node_id) {
            continue;
        }
        let endpoint = StopKey::new(agency_id, &node_id.stop_id);
        let feed_node = lookup
            .get(&endpoint)
            .ok_or_else(|| TransitGraphError::UnmatchedEndpoint {
                endpoint: endpoint.clone(),
                edge_index,
            })?;
        nodes.push(TransitNode::from_feed_node(node_id.clone(), feed_node));
        matched.insert(endpoint);
    }

    let unused = lookup.keys().filter(|k| !matched.contains(*k)).count();
    if unused > 0 {
        log::debug!("{unused} feed stops are not visited by any scheduled edge");
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_node(stop_id: &str, parent: Option<&str>) -> FeedNode {
        FeedNode {
            stop_id: stop_id.to_string(),
            agency_id: String::from("mta"),
            parent_station: parent.map(String::from),
            network_type: String::from("transit"),
            stop_name: None,
            x: None,
            y: None,
        }
    }

    fn feed_edge(from: &str, to: &str, route_id: &str, weight: f64) -> FeedEdge {
        FeedEdge {
            from_stop_id: from.to_string(),
            to_stop_id: to.to_string(),
            agency_id: String::from("mta"),
            route_id: route_id.to_string(),
            weight,
            route_type: String::from("1"),
            network_type: String::from("transit"),
        }
    }

    #[test]
    fn test_parallel_services_become_distinct_nodes() {
        let feed_nodes = vec![feed_node("101", Some("S1")), feed_node("102", Some("S2"))];
        let feed_edges = vec![
            feed_edge("101", "102", "1", 2.0),
            feed_edge("101", "102", "2", 3.0),
        ];
        let edges = canonicalize_edges(&feed_edges).expect("edges should canonicalize");
        let nodes = canonicalize_nodes(&edges, &feed_nodes).expect("nodes should canonicalize");

        let ids: Vec<String> = nodes.iter().map(|n| n.node_id.to_string()).collect();
        assert_eq!(ids, vec!["1::101", "2::101", "1::102", "2::102"]);
        assert!(nodes
            .iter()
            .filter(|n| n.node_id.stop_id == "101")
            .all(|n| n.parent_station.as_deref() == Some("S1")));
    }

    #[test]
    fn test_unmatched_endpoint_is_fatal() {
        let feed_nodes = vec![feed_node("101", Some("S1"))];
        let bad = feed_edge("101", "999", "1", 2.0);
        let mut other_agency = feed_edge("101", "101", "1", 2.0);
        other_agency.agency_id = String::from("nj_transit");

        let edges = canonicalize_edges(&[bad]).expect("edges should canonicalize");
        match canonicalize_nodes(&edges, &feed_nodes) {
            Err(TransitGraphError::UnmatchedEndpoint { endpoint, edge_index }) => {
                assert_eq!(endpoint, StopKey::new("mta", "999"));
                assert_eq!(edge_index, 0);
            }
            other => panic!("expected unmatched endpoint, found {other:?}"),
        }

        let edges = canonicalize_edges(&[other_agency]).expect("edges should canonicalize");
        let result = canonicalize_nodes(&edges, &feed_nodes);
        assert!(matches!(
            result,
            Err(TransitGraphError::UnmatchedEndpoint { .. })
        ));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let result = canonicalize_edges(&[feed_edge("101", "102", "1", -1.0)]);
        assert!(matches!(
            result,
            Err(TransitGraphError::InvalidWeight { edge_index: 0, .. })
        ));
        let result = canonicalize_edges(&[feed_edge("101", "102", "1", f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_route_id_with_separator_is_rejected() {
        let feed_edges = vec![
            feed_edge("101", "102", "1", 2.0),
            feed_edge("101", "102", "GS::shuttle", 2.0),
        ];
        match canonicalize_edges(&feed_edges) {
            Err(TransitGraphError::InvalidRouteId { edge_index, route_id }) => {
                assert_eq!(edge_index, 1);
                assert_eq!(route_id, "GS::shuttle");
            }
            other => panic!("expected invalid route id, found {other:?}"),
        }
    }
}
