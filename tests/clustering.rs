mod common;

use common::synthetic_grid::{Scene, CORTICAL, THRESHOLD};
use pqct_segmentation::prelude::*;
use pqct_segmentation::DistanceMatrix;
use std::collections::BTreeSet;

#[test]
fn two_bone_cross_section_splits_by_bone() {
    let _ = env_logger::builder().is_test(true).try_init();
    let grid = Scene::new(80, 48)
        .disc(22, 24, 9, CORTICAL)
        .disc(66, 20, 5, CORTICAL)
        .build();
    let points = grid.foreground_points(THRESHOLD);
    let pair = cluster_two_way(&points).unwrap();

    let near = |cx: i32, cy: i32, r: i32| -> BTreeSet<Coordinate> {
        points
            .iter()
            .copied()
            .filter(|p| (p.x - cx).pow(2) + (p.y - cy).pow(2) <= r * r)
            .collect()
    };
    let big = near(22, 24, 9);
    let small = near(66, 20, 5);
    let first: BTreeSet<_> = pair.first.iter().copied().collect();
    let second: BTreeSet<_> = pair.second.iter().copied().collect();

    assert_eq!(first.len() + second.len(), points.len());
    assert!(
        (first == big && second == small) || (first == small && second == big),
        "clusters of {} and {} do not follow the bones",
        first.len(),
        second.len()
    );
}

#[test]
fn clusters_follow_catalog_regions() {
    let grid = Scene::new(64, 40)
        .rect(6, 8, 10, 12, CORTICAL)
        .rect(40, 14, 12, 10, CORTICAL)
        .build();
    let catalog = build_catalog(&grid, THRESHOLD);
    assert_eq!(catalog.len(), 2);

    let points = grid.foreground_points(THRESHOLD);
    let pair = cluster_two_way(&points).unwrap();
    let mut sizes = [pair.first.len(), pair.second.len()];
    sizes.sort_unstable();
    let mut expected: Vec<usize> = catalog.regions.iter().map(|r| r.pixel_count).collect();
    expected.sort_unstable();
    assert_eq!(sizes.to_vec(), expected);
}

#[test]
fn seeds_are_the_farthest_foreground_points() {
    let grid = Scene::new(40, 40).disc(20, 20, 8, CORTICAL).build();
    let points = grid.foreground_points(THRESHOLD);
    let matrix = DistanceMatrix::new(&points);
    let (i, j) = matrix.farthest_pair().unwrap();
    let max = matrix.as_matrix().max();

    let pair = cluster_two_way(&points).unwrap();
    assert_eq!(pair.seeds, (points[i], points[j]));
    assert_eq!(pair.seeds.0.distance(pair.seeds.1), max);
}
