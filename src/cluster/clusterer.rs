use super::distance::DistanceMatrix;
use crate::types::Coordinate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Two disjoint clusters covering the input. Members are listed in the
/// order they were added, seed first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPair {
    pub first: Vec<Coordinate>,
    pub second: Vec<Coordinate>,
    /// Seeds of `first` and `second`: the farthest-apart input pair.
    pub seeds: (Coordinate, Coordinate),
}

impl ClusterPair {
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `points` into two clusters grown from the farthest-apart pair.
///
/// Returns `None` for fewer than two points. Points are handled by index,
/// so duplicated coordinates are each placed once.
pub fn cluster_two_way(points: &[Coordinate]) -> Option<ClusterPair> {
    let distances = DistanceMatrix::new(points);
    let (seed_a, seed_b) = distances.farthest_pair()?;

    let mut taken = vec![false; points.len()];
    taken[seed_a] = true;
    taken[seed_b] = true;
    let mut first = vec![points[seed_a]];
    let mut second = vec![points[seed_b]];
    let (mut frontier_a, mut frontier_b) = (seed_a, seed_b);

    for _ in 2..points.len() {
        let (Some((cand_a, d_a)), Some((cand_b, d_b))) = (
            distances.nearest(frontier_a, &taken),
            distances.nearest(frontier_b, &taken),
        ) else {
            break;
        };

        let (pick, to_first) = if d_a <= d_b {
            (cand_a, d_a <= distances.get(frontier_b, cand_a))
        } else {
            (cand_b, distances.get(frontier_a, cand_b) < d_b)
        };

        taken[pick] = true;
        if to_first {
            first.push(points[pick]);
            frontier_a = pick;
        } else {
            second.push(points[pick]);
            frontier_b = pick;
        }
    }

    debug!(
        "cluster_two_way points={} seeds=({}, {}) first={} second={}",
        points.len(),
        seed_a,
        seed_b,
        first.len(),
        second.len()
    );
    Some(ClusterPair {
        first,
        second,
        seeds: (points[seed_a], points[seed_b]),
    })
}
