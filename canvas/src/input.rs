//! Input model: mouse buttons, keys, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries what it captured at the start of
//! the gesture, so every pointer-move recomputes the item from that baseline
//! instead of accumulating deltas. Room drawing is tracked separately by
//! [`crate::draft::RoomDraft`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use roomplanner::doc::{Dimensions, ItemId, Point2D};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// Active furniture gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving an item across the floor.
    Dragging {
        id: ItemId,
        /// Item center minus the press point, so the item does not jump to the cursor.
        offset: Point2D,
    },
    /// Turning an item with its rotate handle.
    Rotating {
        id: ItemId,
        /// Pivot: the item center at the start of the gesture.
        center: Point2D,
        /// `rotation.y` at the start of the gesture, radians.
        initial_rotation: f64,
        /// Pointer angle around `center` at the start of the gesture.
        initial_pointer_angle: f64,
    },
    /// Scaling an item's footprint with a corner handle.
    Resizing {
        id: ItemId,
        center: Point2D,
        initial: Dimensions,
        /// Pointer distance from `center` at the start of the gesture.
        initial_distance: f64,
    },
}

impl InputState {
    /// Item the gesture is manipulating.
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Rotating { id, .. } | Self::Resizing { id, .. } => Some(id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Angle of `pt` around `center`, radians.
#[must_use]
pub fn pointer_angle(center: Point2D, pt: Point2D) -> f64 {
    (pt.y - center.y).atan2(pt.x - center.x)
}
