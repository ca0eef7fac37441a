use crate::cluster::ClusterPair;
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};

use super::TimingBreakdown;

/// Serializable result of a two-way clustering run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterReport {
    pub point_count: usize,
    pub seeds: [Coordinate; 2],
    pub first: Vec<Coordinate>,
    pub second: Vec<Coordinate>,
    pub timings: TimingBreakdown,
}

impl ClusterReport {
    pub fn from_pair(pair: &ClusterPair, timings: TimingBreakdown) -> Self {
        Self {
            point_count: pair.len(),
            seeds: [pair.seeds.0, pair.seeds.1],
            first: pair.first.clone(),
            second: pair.second.clone(),
            timings,
        }
    }
}
