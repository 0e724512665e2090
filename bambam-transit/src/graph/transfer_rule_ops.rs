//! checks a feed's transfers table against the stations of the node table.
//!
//! feeds sometimes keep using a renamed station id in `transfers.txt`.
//! known renames are supplied as [`StationRemap`] data and applied before
//! any rule still referencing an unknown station is dropped.
use std::collections::{BTreeSet, HashSet};

use super::{StationRemap, TransferRule, TransitDiagnostics, TransitNode};

/// returns the transfer rules usable with `nodes`, along with diagnostics
/// listing the remaps applied and the rules dropped.
///
/// when every station referenced by an interchange rule is a parent
/// station of some node, the rules are returned unchanged. otherwise, each
/// remap whose deprecated id is missing (and whose current id is not
/// already used by the rules) is applied to both columns of every rule.
/// rules that still reference a missing station are dropped.
pub fn reconcile_transfer_rules(
    rules: &[TransferRule],
    nodes: &[TransitNode],
    remapping: &[StationRemap],
) -> (Vec<TransferRule>, TransitDiagnostics) {
    let stations: HashSet<&str> = nodes.iter().filter_map(|n| n.parent_station()).collect();
    let missing = missing_stations(rules, &stations);
    if missing.is_empty() {
        return (rules.to_vec(), TransitDiagnostics::default());
    }
    log::warn!(
        "transfer rules reference stations missing from the node table: {}",
        missing.iter().cloned().collect::<Vec<_>>().join(", ")
    );

    let applied: Vec<StationRemap> = remapping
        .iter()
        .filter(|remap| {
            missing.contains(remap.deprecated.as_str())
                && !rules.iter().any(|r| r.references(&remap.current))
        })
        .cloned()
        .collect();
    let remapped: Vec<TransferRule> = rules
        .iter()
        .map(|rule| {
            applied.iter().fold(rule.clone(), |acc, remap| TransferRule {
                from_stop: remap.apply(&acc.from_stop).to_string(),
                to_stop: remap.apply(&acc.to_stop).to_string(),
                min_transfer_time: acc.min_transfer_time,
            })
        })
        .collect();

    let still_missing = missing_stations(&remapped, &stations);
    let (kept, dropped): (Vec<TransferRule>, Vec<TransferRule>) = remapped
        .into_iter()
        .partition(|rule| !still_missing.iter().any(|s| rule.references(s)));
    if !dropped.is_empty() {
        log::warn!("bad stations dropped from transfers: {} rules", dropped.len());
    }

    let diagnostics = TransitDiagnostics {
        remapped_stations: applied,
        dropped_transfer_rules: dropped,
        ..Default::default()
    };
    (kept, diagnostics)
}

/// splits off the rules whose minimum transfer time is negative or not a
/// finite number. these would otherwise produce transfer edges with invalid
/// weights.
pub fn validate_transfer_times(rules: &[TransferRule]) -> (Vec<TransferRule>, TransitDiagnostics) {
    let (valid, invalid): (Vec<TransferRule>, Vec<TransferRule>) = rules
        .iter()
        .cloned()
        .partition(TransferRule::has_valid_transfer_time);
    if !invalid.is_empty() {
        log::warn!(
            "dropped {} transfer rules with an invalid min_transfer_time",
            invalid.len()
        );
    }
    let diagnostics = TransitDiagnostics {
        invalid_transfer_rules: invalid,
        ..Default::default()
    };
    (valid, diagnostics)
}

/// stations referenced by interchange rules that no node belongs to.
fn missing_stations(rules: &[TransferRule], stations: &HashSet<&str>) -> BTreeSet<String> {
    rules
        .iter()
        .filter(|r| r.is_interchange())
        .flat_map(|r| [r.from_stop.as_str(), r.to_stop.as_str()])
        .filter(|s| !stations.contains(s))
        .map(String::from)
        .collect()
}
