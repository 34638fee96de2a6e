//! Shared numeric constants for the canvas crate.

// ── Scale ───────────────────────────────────────────────────────

/// Default 2D scale when no configuration overrides it.
pub const DEFAULT_PIXELS_PER_METER: f64 = 40.0;

/// Spacing of the floor grid, in meters.
pub const GRID_SPACING_M: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// World-space reach of the rotate and resize handles, in meters.
pub const HANDLE_HIT_RADIUS_M: f64 = 0.3;

/// Distance from the item center to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 30.0;

/// A press this close to the first vertex closes the drawn room, in meters.
pub const CLOSE_SNAP_RADIUS_M: f64 = 0.5;

// ── Drawing ─────────────────────────────────────────────────────

/// Radius of the rotate and corner handle dots, in pixels.
pub const HANDLE_SIZE_PX: f64 = 5.0;

/// Radius of a placed room vertex, in pixels.
pub const VERTEX_RADIUS_PX: f64 = 6.0;

/// Radius of the ring around the first vertex, in pixels.
pub const FIRST_VERTEX_RING_PX: f64 = 8.0;

/// Dash pattern for the closing edge and the rubber band, in pixels.
pub const DASH_PX: f64 = 5.0;
