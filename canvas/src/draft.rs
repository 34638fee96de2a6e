//! Room-shape drawing: the in-progress polygon before it becomes the room.
//!
//! DESIGN
//! ======
//! The first press places vertex 0. Every later press starts a rubber-band
//! segment from the last vertex; moves update its free end and the release
//! commits it as the next vertex. With three or more vertices, a press
//! within [`CLOSE_SNAP_RADIUS_M`] of vertex 0 asks to close the shape
//! instead of adding a point.
//!
//! Finishing validates through [`ProjectStore::set_custom_shape`], so the
//! store's polygon rules (and its strictness setting) apply unchanged. A
//! rejected shape leaves the draft intact for further editing.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use roomplanner::doc::Point2D;
use roomplanner::geometry;
use roomplanner::store::{ProjectStore, StoreError};
use tracing::debug;

use crate::consts::CLOSE_SNAP_RADIUS_M;

/// What a press did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPress {
    /// Placed the first vertex.
    Placed,
    /// Started a rubber-band segment from the last vertex.
    LineStarted,
    /// Pressed on vertex 0 of a closable draft.
    CloseRequested,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomDraft {
    points: Vec<Point2D>,
    rubber_band: Option<Point2D>,
}

impl RoomDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Free end of the segment being drawn, if a press is held.
    #[must_use]
    pub fn rubber_band(&self) -> Option<Point2D> {
        self.rubber_band
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enough vertices to form a polygon.
    #[must_use]
    pub fn can_close(&self) -> bool {
        self.points.len() >= 3
    }

    /// Area of the closed draft, once it has three vertices.
    #[must_use]
    pub fn area(&self) -> Option<f64> {
        self.can_close().then(|| geometry::polygon_area(&self.points))
    }

    pub fn press(&mut self, pt: Point2D) -> DraftPress {
        if self.can_close() && self.points[0].distance(pt) < CLOSE_SNAP_RADIUS_M {
            return DraftPress::CloseRequested;
        }
        if self.points.is_empty() {
            self.points.push(pt);
            return DraftPress::Placed;
        }
        self.rubber_band = Some(pt);
        DraftPress::LineStarted
    }

    /// Move the rubber band's free end. Returns whether a segment is live.
    pub fn move_to(&mut self, pt: Point2D) -> bool {
        match &mut self.rubber_band {
            Some(end) => {
                *end = pt;
                true
            }
            None => false,
        }
    }

    /// Commit the rubber band as the next vertex.
    pub fn release(&mut self) -> bool {
        match self.rubber_band.take() {
            Some(end) => {
                self.points.push(end);
                true
            }
            None => false,
        }
    }

    /// Drop the live segment without committing it.
    pub fn abandon_line(&mut self) -> bool {
        self.rubber_band.take().is_some()
    }

    /// Remove the live segment, or else the last vertex.
    pub fn undo_last_point(&mut self) -> bool {
        self.abandon_line() || self.points.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.rubber_band = None;
    }

    /// Commit the draft as the current room's custom shape and clear it.
    ///
    /// Returns the committed area, or `None` when there is no current project.
    ///
    /// # Errors
    ///
    /// [`StoreError::Shape`] when the polygon is rejected; the draft is kept.
    pub fn finish(&mut self, store: &mut ProjectStore) -> Result<Option<f64>, StoreError> {
        let area = geometry::polygon_area(&self.points);
        if !store.set_custom_shape(self.points.clone())? {
            return Ok(None);
        }
        debug!(vertices = self.points.len(), area, "room shape committed");
        self.clear();
        Ok(Some(area))
    }
}
