//! The 2D room view engine: pointer, drop, and keyboard handling over a
//! [`ProjectStore`], plus the browser-bound [`Engine`] that renders it.
//!
//! DESIGN
//! ======
//! [`EngineCore`] holds only view-local state (camera, active gesture, room
//! draft). Every handler borrows the store, applies its edits through the
//! store's normal mutators, and returns [`Action`]s telling the host what
//! changed. Nothing here touches the DOM, so the core is tested natively.
//!
//! Gestures recompute the item from the baseline captured on pointer-down.
//! Pointer-up and pointer-leave both end any gesture and drop an unfinished
//! rubber-band segment.
//!
//! ERROR HANDLING
//! ==============
//! Store rejections during a gesture end the gesture and surface a
//! [`Notice`]. A drop payload that is not a furniture item is reported the
//! same way. No handler fails outright.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use roomplanner::config::PlannerConfig;
use roomplanner::doc::{
    ItemId, MIN_FURNITURE_SIZE, PartialDimensions, PartialFurniture, PartialVec3, PartialView, Point2D,
};
use roomplanner::error::{ErrorCode, Notice};
use roomplanner::placement;
use roomplanner::store::{ProjectStore, StoreError, StoreOptions};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::draft::{DraftPress, RoomDraft};
use crate::hit::{self, HitPart};
use crate::input::{Button, InputState, Key, pointer_angle};
use crate::render;
use crate::storage::BrowserStorage;

/// Below this press distance from the center a corner drag has no usable scale.
const MIN_RESIZE_DISTANCE: f64 = 1e-6;

const CURSOR_DRAW: &str = "crosshair";
const CURSOR_EDIT: &str = "move";

/// What a handler changed, for the host to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FurnitureAdded { id: ItemId },
    FurnitureUpdated { id: ItemId },
    FurnitureRemoved { id: ItemId },
    SelectionChanged(Option<ItemId>),
    RoomShapeChanged,
    DrawingModeChanged(bool),
    Notify(Notice),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub camera: Camera,
    pub input: InputState,
    pub draft: RoomDraft,
}

impl EngineCore {
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self { camera, ..Self::default() }
    }

    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(Camera::new(config.pixels_per_meter))
    }

    // --- Queries ---

    /// Pixel size of the canvas for the current room.
    #[must_use]
    pub fn canvas_size(&self, store: &ProjectStore) -> Option<(f64, f64)> {
        store.current().map(|p| self.camera.canvas_size(&p.room))
    }

    #[must_use]
    pub fn cursor(store: &ProjectStore) -> &'static str {
        if store.view().is_drawing_room { CURSOR_DRAW } else { CURSOR_EDIT }
    }

    /// Drop view-local state the store no longer backs: a draft after drawing
    /// mode was turned off elsewhere, or a gesture on a vanished item.
    pub fn reconcile(&mut self, store: &ProjectStore) {
        if !store.view().is_drawing_room && !self.draft.is_empty() {
            self.draft.clear();
        }
        if let Some(id) = self.input.item_id() {
            if !store.current().is_some_and(|p| p.contains_item(id)) {
                self.input = InputState::Idle;
            }
        }
    }

    // --- Pointer ---

    pub fn on_pointer_down(&mut self, store: &mut ProjectStore, screen: Point, button: Button) -> Vec<Action> {
        self.reconcile(store);
        if button != Button::Primary || store.current().is_none() {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen);

        if store.view().is_drawing_room {
            return match self.draft.press(world) {
                DraftPress::CloseRequested => self.finish_drawing(store),
                DraftPress::Placed | DraftPress::LineStarted => vec![Action::RenderNeeded],
            };
        }

        let Some((id, gesture)) = self.gesture_at(store, world) else {
            self.input = InputState::Idle;
            if store.view().selected_furniture_id.is_none() {
                return Vec::new();
            }
            store.clear_selection();
            return vec![Action::SelectionChanged(None), Action::RenderNeeded];
        };

        debug!(item_id = %id, gesture = ?gesture, "gesture started");
        self.input = gesture;
        let mut actions = Vec::new();
        if !store.view().is_selected(&id) && store.select(&id) {
            actions.push(Action::SelectionChanged(Some(id)));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn gesture_at(&self, store: &ProjectStore, world: Point2D) -> Option<(ItemId, InputState)> {
        let project = store.current()?;
        let view = store.view();
        let handles_for = view.selected_furniture_id.as_deref().filter(|_| view.show_dimensions);
        let found = hit::hit_test(world, project, &self.camera, handles_for)?;
        let item = project.furniture_item(&found.item_id)?;
        let center = item.footprint_center();
        let id = item.id.clone();
        let gesture = match found.part {
            HitPart::Body => InputState::Dragging {
                id: id.clone(),
                offset: Point2D::new(center.x - world.x, center.y - world.y),
            },
            HitPart::RotateHandle => InputState::Rotating {
                id: id.clone(),
                center,
                initial_rotation: item.rotation.y,
                initial_pointer_angle: pointer_angle(center, world),
            },
            HitPart::ResizeHandle(_) => {
                let initial_distance = center.distance(world);
                if initial_distance < MIN_RESIZE_DISTANCE {
                    InputState::Idle
                } else {
                    InputState::Resizing { id: id.clone(), center, initial: item.dimensions, initial_distance }
                }
            }
        };
        Some((id, gesture))
    }

    pub fn on_pointer_move(&mut self, store: &mut ProjectStore, screen: Point) -> Vec<Action> {
        self.reconcile(store);
        let world = self.camera.screen_to_world(screen);
        let (id, patch) = match &self.input {
            InputState::Idle => {
                return if store.view().is_drawing_room && self.draft.move_to(world) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                };
            }
            InputState::Dragging { id, offset } => (
                id.clone(),
                PartialFurniture::position(PartialVec3 {
                    x: Some(world.x + offset.x),
                    z: Some(world.y + offset.y),
                    ..Default::default()
                }),
            ),
            InputState::Rotating { id, center, initial_rotation, initial_pointer_angle } => {
                let rotation = initial_rotation + (pointer_angle(*center, world) - initial_pointer_angle);
                (id.clone(), PartialFurniture::rotation(PartialVec3 { y: Some(rotation), ..Default::default() }))
            }
            InputState::Resizing { id, center, initial, initial_distance } => {
                let factor = center.distance(world) / initial_distance;
                (
                    id.clone(),
                    PartialFurniture::dimensions(PartialDimensions {
                        width: Some((initial.width * factor).max(MIN_FURNITURE_SIZE)),
                        length: Some((initial.length * factor).max(MIN_FURNITURE_SIZE)),
                        ..Default::default()
                    }),
                )
            }
        };
        self.apply(store, id, &patch)
    }

    fn apply(&mut self, store: &mut ProjectStore, id: ItemId, patch: &PartialFurniture) -> Vec<Action> {
        match store.update_furniture(&id, patch) {
            Ok(true) => vec![Action::FurnitureUpdated { id }, Action::RenderNeeded],
            Ok(false) => {
                self.input = InputState::Idle;
                Vec::new()
            }
            Err(e) => {
                warn!(item_id = %id, error = %e, "gesture update rejected");
                self.input = InputState::Idle;
                vec![Action::Notify(Notice::from_error("Could not update furniture", &e))]
            }
        }
    }

    pub fn on_pointer_up(&mut self, store: &mut ProjectStore, _screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let mut changed = store.view().is_drawing_room && self.draft.release();
        changed |= self.end_gesture();
        if changed { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// The pointer left the canvas: end the gesture, drop the live segment.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let changed = self.draft.abandon_line() | self.end_gesture();
        if changed { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    fn end_gesture(&mut self) -> bool {
        if self.input.is_idle() {
            return false;
        }
        if let Some(id) = self.input.item_id() {
            debug!(item_id = %id, "gesture ended");
        }
        self.input = InputState::Idle;
        true
    }

    // --- Drop ---

    /// A catalog item was dropped at `screen`. `payload` is the dragged
    /// furniture descriptor as JSON.
    pub fn on_drop(&mut self, store: &mut ProjectStore, screen: Point, payload: &str) -> Vec<Action> {
        if store.current().is_none() {
            return Vec::new();
        }
        let at = self.camera.screen_to_world(screen);
        let placed = placement::parse_drop_payload(payload).and_then(|template| placement::place_at(store, &template, at));
        match placed {
            Ok(Some(id)) => vec![
                Action::FurnitureAdded { id },
                Action::Notify(Notice::info("Furniture added to your room")),
                Action::RenderNeeded,
            ],
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "dropped furniture rejected");
                let mut notice = Notice::error("Error adding furniture", "Something went wrong when adding furniture.");
                notice.code = Some(e.error_code());
                vec![Action::Notify(notice)]
            }
        }
    }

    // --- Room drawing ---

    pub fn start_drawing(&mut self, store: &mut ProjectStore) -> Vec<Action> {
        self.draft.clear();
        self.input = InputState::Idle;
        store.set_view(&PartialView { is_drawing_room: Some(true), ..Default::default() });
        vec![Action::DrawingModeChanged(true), Action::SetCursor(CURSOR_DRAW), Action::RenderNeeded]
    }

    pub fn cancel_drawing(&mut self, store: &mut ProjectStore) -> Vec<Action> {
        self.draft.clear();
        store.set_view(&PartialView { is_drawing_room: Some(false), ..Default::default() });
        vec![Action::DrawingModeChanged(false), Action::SetCursor(CURSOR_EDIT), Action::RenderNeeded]
    }

    /// Commit the draft as the room shape. On rejection drawing continues.
    pub fn finish_drawing(&mut self, store: &mut ProjectStore) -> Vec<Action> {
        if !self.draft.can_close() {
            return vec![Action::Notify(Notice::error(
                "Not enough points",
                "You need at least 3 points to create a room shape.",
            ))];
        }
        match self.draft.finish(store) {
            Ok(Some(area)) => {
                store.set_view(&PartialView { is_drawing_room: Some(false), ..Default::default() });
                vec![
                    Action::RoomShapeChanged,
                    Action::DrawingModeChanged(false),
                    Action::SetCursor(CURSOR_EDIT),
                    Action::Notify(Notice::success(
                        "Room shape updated",
                        format!("Your custom room shape has been created. Area: {area:.2}m²"),
                    )),
                    Action::RenderNeeded,
                ]
            }
            Ok(None) => Vec::new(),
            Err(e) => vec![Action::Notify(invalid_shape(&e))],
        }
    }

    pub fn undo_last_point(&mut self) -> Vec<Action> {
        if self.draft.undo_last_point() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Revert the room to its rectangle.
    pub fn reset_room_shape(&mut self, store: &mut ProjectStore) -> Vec<Action> {
        if !store.current().is_some_and(|p| p.room.custom_shape.is_some()) {
            return Vec::new();
        }
        store.reset_custom_shape();
        vec![
            Action::RoomShapeChanged,
            Action::Notify(Notice::success("Room shape reset", "Room shape has been reset to default rectangle.")),
            Action::RenderNeeded,
        ]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, store: &mut ProjectStore, key: &Key) -> Vec<Action> {
        let drawing = store.view().is_drawing_room;
        if key.is("Escape") {
            if drawing {
                return self.cancel_drawing(store);
            }
            if self.end_gesture() {
                return vec![Action::RenderNeeded];
            }
            if store.view().selected_furniture_id.is_some() {
                store.clear_selection();
                return vec![Action::SelectionChanged(None), Action::RenderNeeded];
            }
            return Vec::new();
        }
        if key.is("Enter") && drawing {
            return self.finish_drawing(store);
        }
        if (key.is("Delete") || key.is("Backspace")) && !drawing {
            let Some(id) = store.view().selected_furniture_id.clone() else {
                return Vec::new();
            };
            if store.remove_furniture(&id).is_none() {
                return Vec::new();
            }
            self.reconcile(store);
            return vec![Action::FurnitureRemoved { id }, Action::SelectionChanged(None), Action::RenderNeeded];
        }
        Vec::new()
    }
}

fn invalid_shape(err: &StoreError) -> Notice {
    warn!(error = %err, "room shape rejected");
    let mut notice = Notice::error("Invalid shape", "The shape you drew is not valid. Please try again.");
    notice.code = Some(err.error_code());
    notice
}

/// The full canvas engine. Owns the browser canvas element and the store.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub store: ProjectStore,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, store: ProjectStore, core: EngineCore) -> Self {
        Self { canvas, store, core }
    }

    /// Engine over a store persisted to `localStorage`. Stored data that
    /// cannot be read is logged and the store starts empty.
    #[must_use]
    pub fn open(canvas: HtmlCanvasElement, config: &PlannerConfig) -> Self {
        let mut store = ProjectStore::new(Box::new(BrowserStorage), StoreOptions::from(config));
        if let Err(e) = store.hydrate() {
            warn!(error = %e, "could not hydrate projects from browser storage");
        }
        Self::new(canvas, store, EngineCore::from_config(config))
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(&mut self.store, screen, button)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_move(&mut self.store, screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(&mut self.store, screen, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_drop(&mut self, screen: Point, payload: &str) -> Vec<Action> {
        self.core.on_drop(&mut self.store, screen, payload)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(&mut self.store, key)
    }

    pub fn start_drawing(&mut self) -> Vec<Action> {
        self.core.start_drawing(&mut self.store)
    }

    pub fn cancel_drawing(&mut self) -> Vec<Action> {
        self.core.cancel_drawing(&mut self.store)
    }

    pub fn finish_drawing(&mut self) -> Vec<Action> {
        self.core.finish_drawing(&mut self.store)
    }

    pub fn reset_room_shape(&mut self) -> Vec<Action> {
        self.core.reset_room_shape(&mut self.store)
    }

    // --- Render ---

    /// Resize the canvas to the room and draw the current state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(project) = self.store.current() else {
            return Ok(());
        };
        let (width, height) = self.core.camera.canvas_size(&project.room);
        self.canvas.set_width(pixel_len(width));
        self.canvas.set_height(pixel_len(height));
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, project, self.store.view(), &self.core.camera, &self.core.draft)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_len(px: f64) -> u32 {
    px.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}
