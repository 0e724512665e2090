use std::time::Instant;

use super::{
    aggregate_ops, canonicalize_ops, transfer_ops, AveragedEdge, FeedEdge, FeedNode,
    TransferConfig, TransferRule, TransitDiagnostics, TransitEdge, TransitGraphError, TransitNode,
};

/// a transit network with one node per (route, stop) pairing. edges are
/// time-expanded: parallel edges between two nodes are different trips.
#[derive(Clone, Debug, Default)]
pub struct TransitGraph {
    pub nodes: Vec<TransitNode>,
    pub edges: Vec<TransitEdge>,
}

impl TransitGraph {
    /// restructures the feed loader's `{agency, stop}` tables into a graph
    /// keyed by `{route, stop}`. edges are rewritten first, nodes are then
    /// derived from the rewritten edges.
    pub fn canonicalize(
        feed_nodes: &[FeedNode],
        feed_edges: &[FeedEdge],
    ) -> Result<TransitGraph, TransitGraphError> {
        let start_time = Instant::now();
        let edges = canonicalize_ops::canonicalize_edges(feed_edges)?;
        let nodes = canonicalize_ops::canonicalize_nodes(&edges, feed_nodes)?;
        log::info!(
            "restructured transit graph with {} nodes and {} edges in {:.2} seconds",
            nodes.len(),
            edges.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(TransitGraph { nodes, edges })
    }

    /// builds the transfer edges for this graph, see
    /// [`transfer_ops::build_transfer_edges`].
    pub fn build_transfer_edges(
        &self,
        rules: &[TransferRule],
        config: &TransferConfig,
    ) -> Result<(Vec<TransitEdge>, TransitDiagnostics), TransitGraphError> {
        transfer_ops::build_transfer_edges(&self.nodes, &self.edges, rules, config)
    }

    /// appends transfer edges after the scheduled edges.
    pub fn with_transfer_edges(self, transfer_edges: Vec<TransitEdge>) -> TransitGraph {
        let TransitGraph { nodes, mut edges } = self;
        edges.extend(transfer_edges);
        TransitGraph { nodes, edges }
    }

    /// runs the full assembly: canonicalization, transfer synthesis and
    /// headway waits. returns the graph with its transfer edges included.
    pub fn assemble(
        feed_nodes: &[FeedNode],
        feed_edges: &[FeedEdge],
        rules: &[TransferRule],
        config: &TransferConfig,
    ) -> Result<(TransitGraph, TransitDiagnostics), TransitGraphError> {
        let graph = TransitGraph::canonicalize(feed_nodes, feed_edges)?;
        let (transfer_edges, diagnostics) = graph.build_transfer_edges(rules, config)?;
        Ok((graph.with_transfer_edges(transfer_edges), diagnostics))
    }

    /// averages all edges of this graph into a static graph.
    pub fn aggregate(&self) -> Vec<AveragedEdge> {
        aggregate_ops::aggregate_edges(&self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeKey, RouteType};

    fn feed_node(stop_id: &str, parent: Option<&str>) -> FeedNode {
        FeedNode {
            stop_id: stop_id.to_string(),
            agency_id: String::from("mta"),
            parent_station: parent.map(String::from),
            network_type: String::from("transit"),
            stop_name: Some(format!("stop {stop_id}")),
            x: Some(-73.98),
            y: Some(40.75),
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

    /// two lines crossing at station S2, with a walking transfer S2 <-> S4
    fn feed() -> (Vec<FeedNode>, Vec<FeedEdge>, Vec<TransferRule>) {
        let nodes = vec![
            feed_node("101", Some("S1")),
            feed_node("102", Some("S2")),
            feed_node("103", Some("S3")),
            feed_node("104", Some("S4")),
        ];
        let edges = vec![
            feed_edge("101", "102", "1", 4.0),
            feed_edge("101", "102", "1", 6.0),
            feed_edge("102", "103", "1", 4.0),
            feed_edge("103", "102", "2", 8.0),
            feed_edge("102", "104", "2", 3.0),
        ];
        let rules = vec![TransferRule::new("S2", "S4", Some(3.0))];
        (nodes, edges, rules)
    }

    #[test]
    fn test_assemble_end_to_end() {
        let (nodes, edges, rules) = feed();
        let (graph, diagnostics) =
            TransitGraph::assemble(&nodes, &edges, &rules, &TransferConfig::default())
                .expect("graph should assemble");
        // nothing on route 2 arrives at S3, so transfers onto it are dropped
        assert_eq!(diagnostics.missing_headways, vec![NodeKey::new("2", "103")]);

        let ids: Vec<String> = graph.nodes.iter().map(|n| n.node_id.to_string()).collect();
        assert_eq!(ids, vec!["1::101", "1::102", "2::103", "2::102", "1::103", "2::104"]);
        let n_scheduled = graph
            .edges
            .iter()
            .filter(|e| !e.route_type.is_transfer())
            .count();
        assert_eq!(n_scheduled, 5);

        // intra S2: 1::102 <-> 2::102, using the time listed for transfers from S2
        let intra = graph
            .edges
            .iter()
            .find(|e| e.from_id == NodeKey::new("2", "102") && e.to_id == NodeKey::new("1", "102"))
            .expect("intra-station transfer exists");
        // arrivals at 1::102 average 5.0 minutes
        assert_eq!(intra.weight, 3.0 + 2.5);
        assert_eq!(intra.route_type, RouteType::Transfer);

        // inter S2 -> S4: 1::102 -> 2::104 changes route, rule time 3.0
        let inter = graph
            .edges
            .iter()
            .find(|e| e.from_id == NodeKey::new("1", "102") && e.to_id == NodeKey::new("2", "104"))
            .expect("inter-station transfer exists");
        assert_eq!(inter.weight, 3.0 + 1.5);
    }

    #[test]
    fn test_aggregate_after_assembly() {
        let (nodes, edges, rules) = feed();
        let (graph, _) =
            TransitGraph::assemble(&nodes, &edges, &rules, &TransferConfig::default())
                .expect("graph should assemble");
        let averaged = graph.aggregate();
        let first = &averaged[0];
        assert_eq!(first.edge.from_id, NodeKey::new("1", "101"));
        assert_eq!(first.trip_count, 2);
        assert_eq!(first.edge.weight, 5.0);
        let total_trips: usize = averaged.iter().map(|a| a.trip_count).sum();
        assert_eq!(total_trips, graph.edges.len());
    }

    #[test]
    fn test_assemble_fails_on_unmatched_endpoint() {
        let (nodes, mut edges, rules) = feed();
        edges.push(feed_edge("104", "105", "2", 1.0));
        let result = TransitGraph::assemble(&nodes, &edges, &rules, &TransferConfig::default());
        assert!(matches!(
            result,
            Err(TransitGraphError::UnmatchedEndpoint { edge_index: 5, .. })
        ));
    }
}
