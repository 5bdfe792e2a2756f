//! End-to-end loader integration tests
//!
//! Tests point set loading → import → square detection

use squares_core::*;
use std::path::PathBuf;

/// Helper to load a point set from fixtures
fn load_fixture(name: &str) -> PointSet {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/point_sets")
        .join(format!("{}.json", name));
    load_point_set(&path).expect("Failed to load point set")
}

fn service_for(name: &str) -> SquareService {
    let service: SquareService = SquareService::default();
    service.import_points(load_fixture(name).coords());
    service
}

#[test]
fn test_fixture_square_counts() {
    let cases = [
        ("empty", 0),
        ("unit_square", 1),
        ("rotated_square", 1),
        ("rectangle", 0),
        ("rhombus", 0),
        ("no_square", 0),
        ("two_squares", 2),
        ("grid_3x3", 6),
        ("large_square", 1),
        ("negative_square", 1),
        ("duplicate_points", 1),
        ("shared_diagonal", 1),
    ];

    for (name, expected) in cases {
        let service = service_for(name);
        assert_eq!(service.count_squares(), expected, "fixture {}", name);
        assert_eq!(service.squares().len(), expected, "fixture {}", name);
    }
}

#[test]
fn test_duplicate_points_collapse_on_import() {
    let set = load_fixture("duplicate_points");
    assert_eq!(set.len(), 5);

    let service: SquareService = SquareService::default();
    service.import_points(set.coords());
    assert_eq!(service.points().len(), 4);
}

#[test]
fn test_import_order_only_changes_ids() {
    let set = load_fixture("grid_3x3");
    let mut reversed = set.points.clone();
    reversed.reverse();

    let forward: SquareService = SquareService::default();
    forward.import_points(set.coords());
    let backward: SquareService = SquareService::default();
    backward.import_points(reversed);

    let forward_keys: Vec<SquareKey> = {
        let mut keys: Vec<_> = forward.squares().iter().map(Square::key).collect();
        keys.sort();
        keys
    };
    let backward_keys: Vec<SquareKey> = {
        let mut keys: Vec<_> = backward.squares().iter().map(Square::key).collect();
        keys.sort();
        keys
    };

    assert_eq!(forward_keys, backward_keys);
    assert_ne!(
        forward.repository().find_by_coordinates(0, 0).map(|p| p.id),
        backward.repository().find_by_coordinates(0, 0).map(|p| p.id),
        "Ids follow import order"
    );
}

#[test]
fn test_delete_then_recount() {
    let service = service_for("grid_3x3");
    assert_eq!(service.count_squares(), 6);

    // The center is a corner of all four unit squares, but not of the
    // side-2 square or the tilted one
    let center = service
        .points()
        .into_iter()
        .find(|p| p.x == 1 && p.y == 1)
        .expect("center point");
    assert!(service.delete_point(center.id));

    assert_eq!(service.count_squares(), 2);
}

#[test]
fn test_reimport_keeps_ids_increasing() {
    let service = service_for("unit_square");
    let first_max = service.points().iter().map(|p| p.id).max().unwrap();

    service.import_points(load_fixture("unit_square").coords());
    let second_min = service.points().iter().map(|p| p.id).min().unwrap();

    assert!(second_min > first_max);
}
