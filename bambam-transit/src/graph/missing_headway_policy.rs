use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a transfer edge whose
/// destination has no scheduled arrivals to estimate a headway from
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingHeadwayPolicy {
    Fail,
    #[default]
    DropEdge,
}
