#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use roomplanner::doc::{Dimensions, Material};

fn drawn(points: &[(f64, f64)]) -> RoomDraft {
    let mut draft = RoomDraft::new();
    for &(x, y) in points {
        draft.press(Point2D::new(x, y));
        draft.release();
    }
    draft
}

fn sofa(color: &str) -> FurnitureItem {
    FurnitureItem {
        id: "sofa-1".into(),
        name: "Sofa".into(),
        dimensions: Dimensions::new(2.0, 0.8, 0.9),
        material: Material::solid("m", "Fabric", color),
        ..Default::default()
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

#[test]
fn lengths_and_areas_use_two_decimals() {
    assert_eq!(format_length(2.5), "2.50m");
    assert_eq!(format_length(1.0 / 3.0), "0.33m");
    assert_eq!(format_area(12.0), "Area: 12.00m²");
}

#[test]
fn caption_trims_trailing_zeros() {
    assert_eq!(dimension_caption(&sofa("#3b82f6")), "Sofa (2x0.9m)");
    let mut odd = sofa("#3b82f6");
    odd.dimensions.width = 1.234_5;
    assert_eq!(dimension_caption(&odd), "Sofa (1.23x0.9m)");
}

// =============================================================================
// DRAFT OVERLAY
// =============================================================================

#[test]
fn empty_draft_has_no_labels() {
    assert_eq!(draft_overlay(&RoomDraft::new()), DraftOverlay::default());
}

#[test]
fn open_draft_labels_edges_only() {
    let overlay = draft_overlay(&drawn(&[(0.0, 0.0), (4.0, 0.0)]));
    assert_eq!(overlay.edges.len(), 1);
    assert_eq!(overlay.edges[0].text, "4.00m");
    assert_eq!(overlay.edges[0].mid, Point2D::new(2.0, 0.0));
    assert!(overlay.closing.is_none());
    assert!(overlay.area.is_none());
}

#[test]
fn closable_draft_adds_closing_edge_and_area() {
    let overlay = draft_overlay(&drawn(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]));
    assert_eq!(overlay.edges.len(), 2);
    let closing = overlay.closing.unwrap();
    assert_eq!(closing.text, "5.00m");
    assert_eq!(closing.from, Point2D::new(4.0, 3.0));
    assert_eq!(closing.to, Point2D::new(0.0, 0.0));
    let (at, text) = overlay.area.unwrap();
    assert_eq!(text, "Area: 6.00m²");
    assert!((at.x - 8.0 / 3.0).abs() < 1e-12);
    assert_eq!(at.y, 1.0);
}

#[test]
fn rubber_band_is_labelled() {
    let mut draft = drawn(&[(1.0, 1.0)]);
    draft.press(Point2D::new(1.0, 1.0));
    draft.move_to(Point2D::new(1.0, 3.0));
    let band = draft_overlay(&draft).rubber_band.unwrap();
    assert_eq!(band.text, "2.00m");
    assert_eq!(band.angle, FRAC_PI_2);
}

// =============================================================================
// ITEM STYLE
// =============================================================================

#[test]
fn selection_raises_opacity_and_outlines() {
    let item = sofa("#3b82f6");
    assert_eq!(
        item_style(&item, false),
        ItemStyle { fill: "#3b82f640".into(), stroke: "#3b82f6".into(), line_width: 1.0 }
    );
    assert_eq!(
        item_style(&item, true),
        ItemStyle { fill: "#3b82f680".into(), stroke: "#000".into(), line_width: 2.0 }
    );
}

#[test]
fn non_hex_colors_are_used_as_is() {
    assert_eq!(item_style(&sofa("tomato"), false).fill, "tomato");
    assert_eq!(item_style(&sofa("#abc"), true).fill, "#abc");
}
