//! Two-way clustering of point sets.
//!
//! `cluster_two_way` seeds two clusters with the farthest-apart pair of
//! points and grows them one point at a time from each cluster's most recent
//! member (its frontier). At every step the closer of the two frontier
//! candidates is placed, unless the other frontier is at least as close to
//! it. Exact ties go to the first cluster.
//!
//! Distances come from a dense symmetric `DistanceMatrix`, which costs
//! O(n²) memory. Inputs are expected in the low thousands of points (masks
//! of one cross-section), not arbitrary point clouds. With the `parallel`
//! feature the matrix is built with rayon; every scan over it runs
//! sequentially in index order, so results do not depend on the feature.

mod clusterer;
mod distance;

pub use clusterer::{cluster_two_way, ClusterPair};
pub use distance::DistanceMatrix;
