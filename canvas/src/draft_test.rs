#![allow(clippy::float_cmp)]

use super::*;
use roomplanner::doc::Dimensions;
use roomplanner::geometry::ShapeError;

fn drawn(points: &[(f64, f64)]) -> RoomDraft {
    let mut draft = RoomDraft::new();
    for &(x, y) in points {
        draft.press(Point2D::new(x, y));
        draft.release();
    }
    draft
}

fn store() -> ProjectStore {
    let mut store = ProjectStore::in_memory();
    store.create_project("Living Room", Dimensions::new(5.0, 2.5, 4.0));
    store
}

// =============================================================================
// PLACING POINTS
// =============================================================================

#[test]
fn first_press_places_vertex_zero() {
    let mut draft = RoomDraft::new();
    assert_eq!(draft.press(Point2D::new(1.0, 1.0)), DraftPress::Placed);
    assert_eq!(draft.points(), &[Point2D::new(1.0, 1.0)]);
    assert_eq!(draft.rubber_band(), None);
    assert!(!draft.release());
}

#[test]
fn rubber_band_commits_on_release() {
    let mut draft = drawn(&[(0.0, 0.0)]);
    assert_eq!(draft.press(Point2D::new(1.0, 0.0)), DraftPress::LineStarted);
    assert!(draft.move_to(Point2D::new(3.0, 0.0)));
    assert_eq!(draft.points().len(), 1);
    assert!(draft.release());
    assert_eq!(draft.points(), &[Point2D::new(0.0, 0.0), Point2D::new(3.0, 0.0)]);
}

#[test]
fn move_without_press_does_nothing() {
    let mut draft = drawn(&[(0.0, 0.0)]);
    assert!(!draft.move_to(Point2D::new(2.0, 2.0)));
    assert_eq!(draft.rubber_band(), None);
}

#[test]
fn abandoned_line_is_not_committed() {
    let mut draft = drawn(&[(0.0, 0.0)]);
    draft.press(Point2D::new(2.0, 0.0));
    assert!(draft.abandon_line());
    assert!(!draft.release());
    assert_eq!(draft.points().len(), 1);
}

#[test]
fn undo_drops_live_line_then_vertices() {
    let mut draft = drawn(&[(0.0, 0.0), (2.0, 0.0)]);
    draft.press(Point2D::new(2.0, 2.0));
    assert!(draft.undo_last_point());
    assert_eq!(draft.points().len(), 2);
    assert!(draft.undo_last_point());
    assert!(draft.undo_last_point());
    assert!(!draft.undo_last_point());
    assert!(draft.is_empty());
}

// =============================================================================
// CLOSING
// =============================================================================

#[test]
fn press_near_first_vertex_requests_close() {
    let mut draft = drawn(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
    assert_eq!(draft.press(Point2D::new(0.3, 0.3)), DraftPress::CloseRequested);
    assert_eq!(draft.rubber_band(), None);
    assert_eq!(draft.points().len(), 3);
}

#[test]
fn two_points_never_close() {
    let mut draft = drawn(&[(0.0, 0.0), (4.0, 0.0)]);
    assert_eq!(draft.press(Point2D::new(0.1, 0.0)), DraftPress::LineStarted);
}

#[test]
fn area_needs_three_points() {
    assert_eq!(drawn(&[(0.0, 0.0), (4.0, 0.0)]).area(), None);
    assert_eq!(drawn(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).area(), Some(12.0));
}

// =============================================================================
// FINISH
// =============================================================================

#[test]
fn finish_commits_shape_and_clears() {
    let mut store = store();
    let mut draft = drawn(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    assert_eq!(draft.finish(&mut store).unwrap(), Some(12.0));
    assert!(draft.is_empty());
    assert_eq!(store.current().unwrap().room.floor_area(), 12.0);

    store.reset_custom_shape();
    assert_eq!(store.current().unwrap().room.floor_area(), 20.0);
}

#[test]
fn rejected_shape_keeps_draft() {
    let mut store = store();
    let mut draft = drawn(&[(0.0, 0.0), (4.0, 0.0)]);
    let err = draft.finish(&mut store).unwrap_err();
    assert!(matches!(err, StoreError::Shape(ShapeError::TooFewPoints { count: 2 })));
    assert_eq!(draft.points().len(), 2);
    assert!(store.current().unwrap().room.custom_shape.is_none());
}

#[test]
fn finish_without_project_is_noop() {
    let mut store = ProjectStore::in_memory();
    let mut draft = drawn(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
    assert_eq!(draft.finish(&mut store).unwrap(), None);
    assert_eq!(draft.points().len(), 3);
}
