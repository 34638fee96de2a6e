//! Hit-testing furniture footprints and the selection handles.
//!
//! All tests run in world space (meters). Handles have a fixed world reach
//! ([`HANDLE_HIT_RADIUS_M`]); the rotate handle's position depends on the
//! camera because it is drawn a fixed pixel distance from the item center.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use roomplanner::doc::{FurnitureItem, ItemId, Point2D, Project};
use roomplanner::geometry;

use crate::camera::Camera;
use crate::consts::{HANDLE_HIT_RADIUS_M, ROTATE_HANDLE_OFFSET_PX};

/// Which part of an item was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    RotateHandle,
    ResizeHandle(Corner),
}

/// Footprint corner, named for an unrotated item (`y` grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Se,
    Sw,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::Nw, Corner::Ne, Corner::Se, Corner::Sw];

    fn signs(self) -> (f64, f64) {
        match self {
            Self::Nw => (-1.0, -1.0),
            Self::Ne => (1.0, -1.0),
            Self::Se => (1.0, 1.0),
            Self::Sw => (-1.0, 1.0),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub item_id: ItemId,
    pub part: HitPart,
}

/// World position of the rotate handle: a fixed pixel offset from the
/// center along the item's heading.
#[must_use]
pub fn rotate_handle_position(item: &FurnitureItem, camera: &Camera) -> Point2D {
    let center = item.footprint_center();
    let reach = camera.screen_dist_to_world(ROTATE_HANDLE_OFFSET_PX);
    let (sin, cos) = item.rotation.y.sin_cos();
    Point2D::new(center.x + cos * reach, center.y + sin * reach)
}

/// World position of `corner`, rotated with the item.
#[must_use]
pub fn corner_position(item: &FurnitureItem, corner: Corner) -> Point2D {
    let (sx, sy) = corner.signs();
    let local = Point2D::new(sx * item.dimensions.width / 2.0, sy * item.dimensions.length / 2.0);
    let offset = geometry::rotate_point(local, item.rotation.y);
    let center = item.footprint_center();
    Point2D::new(center.x + offset.x, center.y + offset.y)
}

/// Whether `pt` falls inside the item's rotated footprint.
#[must_use]
pub fn footprint_contains(item: &FurnitureItem, pt: Point2D) -> bool {
    let center = item.footprint_center();
    let local = geometry::rotate_point(Point2D::new(pt.x - center.x, pt.y - center.y), -item.rotation.y);
    local.x.abs() <= item.dimensions.width / 2.0 && local.y.abs() <= item.dimensions.length / 2.0
}

/// Handle of `item` under `pt`, rotate handle first.
#[must_use]
pub fn handle_at(item: &FurnitureItem, pt: Point2D, camera: &Camera) -> Option<HitPart> {
    if rotate_handle_position(item, camera).distance(pt) < HANDLE_HIT_RADIUS_M {
        return Some(HitPart::RotateHandle);
    }
    Corner::ALL
        .into_iter()
        .find(|&c| corner_position(item, c).distance(pt) < HANDLE_HIT_RADIUS_M)
        .map(HitPart::ResizeHandle)
}

/// Test what is under `world_pt`. The selected item's handles win over any
/// body; bodies are tested top-most (last placed) first.
#[must_use]
pub fn hit_test(world_pt: Point2D, project: &Project, camera: &Camera, selected_id: Option<&str>) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| project.furniture_item(id)) {
        if let Some(part) = handle_at(selected, world_pt, camera) {
            return Some(Hit { item_id: selected.id.clone(), part });
        }
    }
    project
        .furniture
        .iter()
        .rev()
        .find(|item| footprint_contains(item, world_pt))
        .map(|item| Hit { item_id: item.id.clone(), part: HitPart::Body })
}
