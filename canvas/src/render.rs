//! Rendering: draws the room, furniture, and drawing overlay to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the project, view state, and draft and produces pixels; it does
//! not mutate application state. Labels and colors come from
//! [`crate::overlay`] so their content is tested off the browser.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use roomplanner::doc::{FurnitureItem, Point2D, Project, Room, ViewState};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{DASH_PX, FIRST_VERTEX_RING_PX, GRID_SPACING_M, HANDLE_SIZE_PX, VERTEX_RADIUS_PX};
use crate::draft::RoomDraft;
use crate::hit::{self, Corner};
use crate::overlay::{self, SegmentLabel};

const FLOOR_FILL: &str = "#f8f9fa";
const FLOOR_LINE: &str = "#e9ecef";
const TEXT: &str = "#000";
const ROTATE_HANDLE: &str = "#2563eb";
const RESIZE_HANDLE: &str = "#10b981";
const DRAFT_LINE: &str = "#4338ca";
const FIRST_VERTEX: &str = "#22c55e";

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    project: &Project,
    view: &ViewState,
    camera: &Camera,
    draft: &RoomDraft,
) -> Result<(), JsValue> {
    let (width, height) = camera.canvas_size(&project.room);
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 1: floor and grid.
    draw_floor(ctx, &project.room, camera, width, height);
    if view.show_grid {
        draw_grid(ctx, &project.room, camera, width, height);
    }

    // Layer 2: furniture in placement order.
    for item in &project.furniture {
        let selected = view.is_selected(&item.id);
        draw_item(ctx, item, camera, selected)?;
        if selected && view.show_dimensions {
            draw_handles(ctx, item, camera)?;
        }
    }

    // Layer 3: room-drawing overlay.
    if view.is_drawing_room && !draft.is_empty() {
        draw_draft(ctx, draft, camera)?;
    }
    Ok(())
}

// =============================================================
// Floor
// =============================================================

fn draw_floor(ctx: &CanvasRenderingContext2d, room: &Room, camera: &Camera, width: f64, height: f64) {
    ctx.set_fill_style_str(FLOOR_FILL);
    let Some(shape) = room.custom_footprint() else {
        ctx.fill_rect(0.0, 0.0, width, height);
        return;
    };
    trace_polygon(ctx, shape, camera);
    ctx.fill();
    ctx.set_stroke_style_str(FLOOR_LINE);
    ctx.set_line_width(2.0);
    ctx.stroke();
}

fn draw_grid(ctx: &CanvasRenderingContext2d, room: &Room, camera: &Camera, width: f64, height: f64) {
    let (extent_x, extent_y) = room.extent();
    ctx.set_stroke_style_str(FLOOR_LINE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = 0.0;
    while x <= extent_x {
        let px = camera.world_dist_to_screen(x);
        ctx.move_to(px, 0.0);
        ctx.line_to(px, height);
        x += GRID_SPACING_M;
    }
    let mut y = 0.0;
    while y <= extent_y {
        let py = camera.world_dist_to_screen(y);
        ctx.move_to(0.0, py);
        ctx.line_to(width, py);
        y += GRID_SPACING_M;
    }
    ctx.stroke();
}

// =============================================================
// Furniture
// =============================================================

fn draw_item(ctx: &CanvasRenderingContext2d, item: &FurnitureItem, camera: &Camera, selected: bool) -> Result<(), JsValue> {
    let center = camera.world_to_screen(item.footprint_center());
    let w = camera.world_dist_to_screen(item.dimensions.width);
    let l = camera.world_dist_to_screen(item.dimensions.length);
    let style = overlay::item_style(item, selected);

    ctx.save();
    ctx.translate(center.x, center.y)?;
    ctx.rotate(item.rotation.y)?;
    ctx.set_fill_style_str(&style.fill);
    ctx.fill_rect(-w / 2.0, -l / 2.0, w, l);
    ctx.set_stroke_style_str(&style.stroke);
    ctx.set_line_width(style.line_width);
    ctx.stroke_rect(-w / 2.0, -l / 2.0, w, l);

    ctx.set_fill_style_str(TEXT);
    ctx.set_font("10px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(&item.name, 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_handles(ctx: &CanvasRenderingContext2d, item: &FurnitureItem, camera: &Camera) -> Result<(), JsValue> {
    let center = camera.world_to_screen(item.footprint_center());

    ctx.save();
    ctx.set_fill_style_str(TEXT);
    ctx.set_font("12px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(&overlay::dimension_caption(item), center.x, center.y - 10.0)?;

    // Rotate handle on a stalk along the heading.
    let knob = camera.world_to_screen(hit::rotate_handle_position(item, camera));
    ctx.set_stroke_style_str(ROTATE_HANDLE);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(center.x, center.y);
    ctx.line_to(knob.x, knob.y);
    ctx.stroke();
    fill_dot(ctx, knob, HANDLE_SIZE_PX, ROTATE_HANDLE)?;

    for corner in Corner::ALL {
        let at = camera.world_to_screen(hit::corner_position(item, corner));
        fill_dot(ctx, at, HANDLE_SIZE_PX, RESIZE_HANDLE)?;
    }
    ctx.restore();
    Ok(())
}

// =============================================================
// Room drawing overlay
// =============================================================

fn draw_draft(ctx: &CanvasRenderingContext2d, draft: &RoomDraft, camera: &Camera) -> Result<(), JsValue> {
    let labels = overlay::draft_overlay(draft);
    let points = draft.points();

    ctx.save();
    ctx.set_stroke_style_str(DRAFT_LINE);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, p) in points.iter().enumerate() {
        let s = camera.world_to_screen(*p);
        if i == 0 {
            ctx.move_to(s.x, s.y);
        } else {
            ctx.line_to(s.x, s.y);
        }
    }
    ctx.stroke();

    if let Some(closing) = &labels.closing {
        stroke_dashed(ctx, closing, camera)?;
    }
    if let Some(band) = &labels.rubber_band {
        stroke_dashed(ctx, band, camera)?;
    }

    for label in labels.edges.iter().chain(&labels.closing).chain(&labels.rubber_band) {
        draw_segment_label(ctx, label, camera)?;
    }
    if let Some((at, text)) = &labels.area {
        let s = camera.world_to_screen(*at);
        ctx.set_fill_style_str(TEXT);
        ctx.set_font("12px Arial");
        ctx.set_text_align("center");
        ctx.fill_text(text, s.x, s.y)?;
    }

    for (i, p) in points.iter().enumerate() {
        let s = camera.world_to_screen(*p);
        fill_dot(ctx, s, VERTEX_RADIUS_PX, DRAFT_LINE)?;
        if i == 0 {
            ctx.begin_path();
            ctx.arc(s.x, s.y, FIRST_VERTEX_RING_PX, 0.0, 2.0 * PI)?;
            ctx.set_stroke_style_str(FIRST_VERTEX);
            ctx.set_line_width(2.0);
            ctx.stroke();
        }
    }
    ctx.restore();
    Ok(())
}

fn stroke_dashed(ctx: &CanvasRenderingContext2d, seg: &SegmentLabel, camera: &Camera) -> Result<(), JsValue> {
    let a = camera.world_to_screen(seg.from);
    let b = camera.world_to_screen(seg.to);
    let dash = js_sys::Array::new();
    dash.push(&DASH_PX.into());
    dash.push(&DASH_PX.into());
    ctx.set_line_dash(&dash)?;
    ctx.set_stroke_style_str(DRAFT_LINE);
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn draw_segment_label(ctx: &CanvasRenderingContext2d, label: &SegmentLabel, camera: &Camera) -> Result<(), JsValue> {
    let mid = camera.world_to_screen(label.mid);
    ctx.save();
    ctx.translate(mid.x, mid.y)?;
    ctx.rotate(label.angle)?;
    ctx.set_fill_style_str(TEXT);
    ctx.set_font("10px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(&label.text, 0.0, -5.0)?;
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

fn trace_polygon(ctx: &CanvasRenderingContext2d, shape: &[Point2D], camera: &Camera) {
    ctx.begin_path();
    for (i, p) in shape.iter().enumerate() {
        let s = camera.world_to_screen(*p);
        if i == 0 {
            ctx.move_to(s.x, s.y);
        } else {
            ctx.line_to(s.x, s.y);
        }
    }
    ctx.close_path();
}

fn fill_dot(ctx: &CanvasRenderingContext2d, at: Point, radius: f64, color: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(color);
    ctx.fill();
    Ok(())
}
