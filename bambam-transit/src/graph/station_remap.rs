use serde::{Deserialize, Serialize};

/// a deprecated parent station identifier still used by a feed's
/// transfers table, along with the identifier that replaced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRemap {
    pub deprecated: String,
    pub current: String,
}

impl StationRemap {
    pub fn new(deprecated: &str, current: &str) -> Self {
        Self {
            deprecated: deprecated.to_string(),
            current: current.to_string(),
        }
    }

    /// returns the replacement for `station` if it is the deprecated id.
    pub fn apply<'a>(&'a self, station: &'a str) -> &'a str {
        if station == self.deprecated {
            &self.current
        } else {
            station
        }
    }
}
