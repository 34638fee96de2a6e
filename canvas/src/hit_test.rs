#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use roomplanner::doc::{Dimensions, Vec3};
use roomplanner::store::ProjectStore;

fn item(id: &str, x: f64, z: f64, width: f64, length: f64) -> FurnitureItem {
    FurnitureItem {
        id: id.into(),
        name: id.into(),
        position: Vec3::new(x, 0.0, z),
        dimensions: Dimensions::new(width, 1.0, length),
        ..Default::default()
    }
}

fn project(items: Vec<FurnitureItem>) -> Project {
    let mut store = ProjectStore::in_memory();
    store.create_project("Den", Dimensions::new(6.0, 2.5, 6.0));
    for item in items {
        store.add_furniture(item).unwrap();
    }
    store.current().unwrap().clone()
}

fn close(a: Point2D, b: Point2D) -> bool {
    a.distance(b) < 1e-9
}

// =============================================================================
// FOOTPRINT
// =============================================================================

#[test]
fn axis_aligned_footprint() {
    let table = item("t", 2.0, 2.0, 2.0, 1.0);
    assert!(footprint_contains(&table, Point2D::new(2.9, 2.4)));
    assert!(footprint_contains(&table, Point2D::new(3.0, 2.5)));
    assert!(!footprint_contains(&table, Point2D::new(2.0, 2.6)));
}

#[test]
fn rotated_footprint_uses_item_space() {
    let mut table = item("t", 2.0, 2.0, 2.0, 1.0);
    table.rotation.y = FRAC_PI_2;
    // A quarter turn swaps the long side onto the y axis.
    assert!(footprint_contains(&table, Point2D::new(2.0, 2.9)));
    assert!(!footprint_contains(&table, Point2D::new(2.9, 2.0)));
}

// =============================================================================
// HANDLES
// =============================================================================

#[test]
fn rotate_handle_sits_thirty_pixels_along_heading() {
    let mut chair = item("c", 1.0, 1.0, 0.5, 0.5);
    let cam = Camera::default();
    assert!(close(rotate_handle_position(&chair, &cam), Point2D::new(1.75, 1.0)));
    chair.rotation.y = FRAC_PI_2;
    assert!(close(rotate_handle_position(&chair, &cam), Point2D::new(1.0, 1.75)));
}

#[test]
fn corners_rotate_with_item() {
    let mut bed = item("b", 3.0, 3.0, 2.0, 1.0);
    assert!(close(corner_position(&bed, Corner::Nw), Point2D::new(2.0, 2.5)));
    assert!(close(corner_position(&bed, Corner::Se), Point2D::new(4.0, 3.5)));
    bed.rotation.y = FRAC_PI_2;
    assert!(close(corner_position(&bed, Corner::Ne), Point2D::new(3.5, 4.0)));
}

#[test]
fn handle_reach_is_under_thirty_centimeters() {
    let bed = item("b", 3.0, 3.0, 2.0, 1.0);
    let cam = Camera::default();
    assert_eq!(handle_at(&bed, Point2D::new(2.1, 2.6), &cam), Some(HitPart::ResizeHandle(Corner::Nw)));
    assert_eq!(handle_at(&bed, Point2D::new(3.0, 3.0), &cam), None);
    assert_eq!(handle_at(&bed, Point2D::new(3.75, 3.1), &cam), Some(HitPart::RotateHandle));
}

// =============================================================================
// HIT TEST
// =============================================================================

#[test]
fn empty_floor_misses() {
    let p = project(vec![item("a", 1.0, 1.0, 1.0, 1.0)]);
    assert_eq!(hit_test(Point2D::new(5.0, 5.0), &p, &Camera::default(), None), None);
}

#[test]
fn topmost_body_wins() {
    let p = project(vec![item("under", 2.0, 2.0, 2.0, 2.0), item("over", 2.5, 2.5, 1.0, 1.0)]);
    let hit = hit_test(Point2D::new(2.5, 2.5), &p, &Camera::default(), None).unwrap();
    assert_eq!(hit, Hit { item_id: "over".into(), part: HitPart::Body });
}

#[test]
fn handles_only_for_selected_item() {
    let p = project(vec![item("a", 2.0, 2.0, 1.0, 1.0)]);
    let cam = Camera::default();
    let corner = Point2D::new(1.55, 1.55);
    assert_eq!(hit_test(corner, &p, &cam, None).unwrap().part, HitPart::Body);
    assert_eq!(
        hit_test(corner, &p, &cam, Some("a")).unwrap().part,
        HitPart::ResizeHandle(Corner::Nw)
    );
}

#[test]
fn selected_handle_beats_body_above_it() {
    let p = project(vec![item("sel", 2.0, 2.0, 1.0, 1.0), item("top", 3.0, 2.0, 1.0, 1.0)]);
    let hit = hit_test(Point2D::new(2.75, 2.0), &p, &Camera::default(), Some("sel")).unwrap();
    assert_eq!(hit, Hit { item_id: "sel".into(), part: HitPart::RotateHandle });
}

#[test]
fn stale_selection_is_ignored() {
    let p = project(vec![item("a", 2.0, 2.0, 1.0, 1.0)]);
    let hit = hit_test(Point2D::new(2.0, 2.0), &p, &Camera::default(), Some("gone")).unwrap();
    assert_eq!(hit.item_id, "a");
}
