//! Text and style computed for the renderer: segment length labels, the
//! live area readout, item dimension captions, and item fill colors.
//!
//! Everything here is pure so it can be tested off the browser; the
//! renderer only converts the results to pixels.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use roomplanner::doc::{FurnitureItem, Point2D};
use roomplanner::geometry;

use crate::draft::RoomDraft;

/// A length label centered on a segment and turned to run along it.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLabel {
    pub from: Point2D,
    pub to: Point2D,
    pub mid: Point2D,
    /// Direction of the segment, radians.
    pub angle: f64,
    pub text: String,
}

impl SegmentLabel {
    #[must_use]
    pub fn between(from: Point2D, to: Point2D) -> Self {
        Self {
            from,
            to,
            mid: Point2D::new(f64::midpoint(from.x, to.x), f64::midpoint(from.y, to.y)),
            angle: (to.y - from.y).atan2(to.x - from.x),
            text: format_length(geometry::line_length(from, to)),
        }
    }
}

/// Labels for everything the room-drawing overlay shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftOverlay {
    /// One per committed edge, in drawing order.
    pub edges: Vec<SegmentLabel>,
    /// Dashed edge from the last vertex back to vertex 0.
    pub closing: Option<SegmentLabel>,
    /// Live segment from the last vertex to the pointer.
    pub rubber_band: Option<SegmentLabel>,
    /// Area text and where to draw it.
    pub area: Option<(Point2D, String)>,
}

#[must_use]
pub fn draft_overlay(draft: &RoomDraft) -> DraftOverlay {
    let points = draft.points();
    let edges = points.windows(2).map(|w| SegmentLabel::between(w[0], w[1])).collect();
    let closing = match (draft.can_close(), points.first(), points.last()) {
        (true, Some(&first), Some(&last)) => Some(SegmentLabel::between(last, first)),
        _ => None,
    };
    let rubber_band = match (points.last(), draft.rubber_band()) {
        (Some(&last), Some(end)) => Some(SegmentLabel::between(last, end)),
        _ => None,
    };
    let area = draft.area().map(|a| (geometry::centroid(points), format_area(a)));
    DraftOverlay { edges, closing, rubber_band, area }
}

/// `"2.50m"`.
#[must_use]
pub fn format_length(meters: f64) -> String {
    format!("{meters:.2}m")
}

/// `"Area: 12.00m²"`.
#[must_use]
pub fn format_area(square_meters: f64) -> String {
    format!("Area: {square_meters:.2}m²")
}

/// Caption above a selected item: `"Sofa (2x0.9m)"`.
#[must_use]
pub fn dimension_caption(item: &FurnitureItem) -> String {
    format!(
        "{} ({}x{}m)",
        item.name,
        trim_number(item.dimensions.width),
        trim_number(item.dimensions.length)
    )
}

/// Up to two decimals with trailing zeros dropped.
fn trim_number(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

/// Fill and outline for an item's footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    pub fill: String,
    pub stroke: String,
    pub line_width: f64,
}

/// Translucent material fill; the selected item is more opaque and outlined in black.
#[must_use]
pub fn item_style(item: &FurnitureItem, selected: bool) -> ItemStyle {
    let color = &item.material.color;
    let alpha = if selected { "80" } else { "40" };
    let fill = if is_hex6(color) { format!("{color}{alpha}") } else { color.clone() };
    ItemStyle {
        fill,
        stroke: if selected { "#000".to_string() } else { color.clone() },
        line_width: if selected { 2.0 } else { 1.0 },
    }
}

fn is_hex6(color: &str) -> bool {
    color.len() == 7 && color.starts_with('#') && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
