use serde::{Deserialize, Serialize};

use crate::{
    app::TransitAppError,
    graph::{MissingHeadwayPolicy, StationRemap, TransferConfig, DEFAULT_BASE_TRANSFER_TIME},
};

/// defines behaviors for a transit graph assembly run
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct TransitGraphConfiguration {
    /// minutes
    pub base_transfer_time: f64,
    pub station_remapping: Vec<StationRemap>,
    pub missing_headway_policy: MissingHeadwayPolicy,
    /// write a static averaged edge table instead of the time-expanded one
    pub aggregate: bool,
    /// service day the feed's schedule was extracted for
    pub day: String,
    /// service window the feed's schedule was extracted for, `HH:MM:SS`
    pub time_range: (String, String),
    pub overwrite: bool,
}

impl Default for TransitGraphConfiguration {
    fn default() -> Self {
        Self {
            base_transfer_time: DEFAULT_BASE_TRANSFER_TIME,
            station_remapping: vec![],
            missing_headway_policy: MissingHeadwayPolicy::default(),
            aggregate: false,
            day: String::from("monday"),
            time_range: (String::from("06:00:00"), String::from("10:00:00")),
            overwrite: false,
        }
    }
}

impl TransitGraphConfiguration {
    pub fn transfer_config(&self) -> TransferConfig {
        TransferConfig {
            base_transfer_time: self.base_transfer_time,
            station_remapping: self.station_remapping.clone(),
            missing_headway_policy: self.missing_headway_policy,
        }
    }

    fn validate(self) -> Result<Self, TransitAppError> {
        if !self.base_transfer_time.is_finite() || self.base_transfer_time < 0.0 {
            return Err(TransitAppError::ConfigurationError(format!(
                "base_transfer_time must be a non-negative number of minutes, found {}",
                self.base_transfer_time
            )));
        }
        Ok(self)
    }
}

impl TryFrom<&String> for TransitGraphConfiguration {
    type Error = TransitAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: TransitGraphConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TransitAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                TransitAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                TransitAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                TransitAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(TransitAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_example_configuration_decodes() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("config")
            .join("bambam-transit.toml");
        let conf = TransitGraphConfiguration::try_from(&path.to_string_lossy().to_string())
            .expect("example configuration should decode");
        assert_eq!(conf.base_transfer_time, 2.0);
        assert_eq!(conf.station_remapping, vec![StationRemap::new("140", "142")]);
        assert_eq!(conf.missing_headway_policy, MissingHeadwayPolicy::DropEdge);
        assert_eq!(conf.day, "monday");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let conf: TransitGraphConfiguration =
            serde_json::from_str(r#"{ "base_transfer_time": 3.5, "aggregate": true }"#)
                .expect("partial configuration should decode");
        assert_eq!(conf.base_transfer_time, 3.5);
        assert!(conf.aggregate);
        assert!(conf.station_remapping.is_empty());
        assert_eq!(
            conf.time_range,
            (String::from("06:00:00"), String::from("10:00:00"))
        );
    }

    #[test]
    fn test_negative_base_transfer_time_rejected() {
        let conf = TransitGraphConfiguration {
            base_transfer_time: -1.0,
            ..Default::default()
        };
        assert!(conf.validate().is_err());
    }

    #[test]
    fn test_unsupported_file_type() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let path = path.with_extension("yaml");
        let result = TransitGraphConfiguration::try_from(&path.to_string_lossy().to_string());
        assert!(matches!(result, Err(TransitAppError::ConfigurationError(_))));
    }
}
