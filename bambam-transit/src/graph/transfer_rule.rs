use serde::{Deserialize, Serialize};

/// a row of a GTFS `transfers.txt` file. columns other than the stop pair
/// and the minimum transfer time are ignored.
/// see [https://gtfs.org/documentation/schedule/reference/#transferstxt].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRuleRow {
    pub from_stop_id: String,
    pub to_stop_id: String,
    /// seconds
    pub min_transfer_time: Option<f64>,
}

/// a transfer hint between two physical stations, with the minimum
/// transfer time converted to minutes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRule {
    pub from_stop: String,
    pub to_stop: String,
    /// minutes
    pub min_transfer_time: Option<f64>,
}

impl TransferRule {
    pub fn new(from_stop: &str, to_stop: &str, min_transfer_time: Option<f64>) -> Self {
        Self {
            from_stop: from_stop.to_string(),
            to_stop: to_stop.to_string(),
            min_transfer_time,
        }
    }

    /// true if this rule connects two different physical stations.
    pub fn is_interchange(&self) -> bool {
        self.from_stop != self.to_stop
    }

    /// false if the minimum transfer time is negative or not a number. a
    /// missing time is valid, the baseline is used in its place.
    pub fn has_valid_transfer_time(&self) -> bool {
        self.min_transfer_time
            .map(|t| t.is_finite() && t >= 0.0)
            .unwrap_or(true)
    }

    /// true if either side of this rule is `station`.
    pub fn references(&self, station: &str) -> bool {
        self.from_stop == station || self.to_stop == station
    }
}

impl From<TransferRuleRow> for TransferRule {
    fn from(row: TransferRuleRow) -> Self {
        TransferRule {
            from_stop: row.from_stop_id,
            to_stop: row.to_stop_id,
            min_transfer_time: row.min_transfer_time.map(|seconds| seconds / 60.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_converted_to_minutes() {
        let row = TransferRuleRow {
            from_stop_id: String::from("S1"),
            to_stop_id: String::from("S2"),
            min_transfer_time: Some(120.0),
        };
        let rule = TransferRule::from(row);
        assert_eq!(rule.min_transfer_time, Some(2.0));
        assert!(rule.is_interchange());
    }

    #[test]
    fn test_missing_transfer_time_is_kept() {
        let row = TransferRuleRow {
            from_stop_id: String::from("S1"),
            to_stop_id: String::from("S1"),
            min_transfer_time: None,
        };
        let rule = TransferRule::from(row);
        assert_eq!(rule.min_transfer_time, None);
        assert!(!rule.is_interchange());
        assert!(rule.has_valid_transfer_time());
    }

    #[test]
    fn test_negative_or_nan_transfer_time_is_invalid() {
        assert!(TransferRule::new("S1", "S2", Some(0.0)).has_valid_transfer_time());
        assert!(!TransferRule::new("S1", "S2", Some(-10.0)).has_valid_transfer_time());
        assert!(!TransferRule::new("S1", "S2", Some(f64::NAN)).has_valid_transfer_time());
        assert!(!TransferRule::new("S1", "S2", Some(f64::INFINITY)).has_valid_transfer_time());
    }
}
