use serde::{Deserialize, Serialize};

use super::{MissingHeadwayPolicy, StationRemap};

/// minimum time in minutes to transfer by walking or otherwise when the
/// feed does not provide one.
pub const DEFAULT_BASE_TRANSFER_TIME: f64 = 2.0;

/// parameters for synthesizing transfer edges.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferConfig {
    /// transfer time in minutes used when no feed-provided time applies
    pub base_transfer_time: f64,
    pub station_remapping: Vec<StationRemap>,
    pub missing_headway_policy: MissingHeadwayPolicy,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            base_transfer_time: DEFAULT_BASE_TRANSFER_TIME,
            station_remapping: vec![],
            missing_headway_policy: MissingHeadwayPolicy::default(),
        }
    }
}
