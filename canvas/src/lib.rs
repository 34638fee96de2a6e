//! 2D room view for the room planner, compiled to WebAssembly.
//!
//! Draws the room footprint and furniture top-down and turns pointer input
//! into store edits: selecting, moving, rotating, and resizing furniture,
//! drawing a custom room outline, and dropping catalog items onto the floor.
//! The host JavaScript layer wires DOM events to [`engine::Engine`] and reacts
//! to the returned [`engine::Action`]s (toasts, cursor, re-render).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pixels-per-meter conversions and canvas sizing |
//! | [`input`] | Buttons, keys, and the gesture state machine |
//! | [`hit`] | Hit-testing furniture footprints and handles |
//! | [`draft`] | In-progress room outline |
//! | [`overlay`] | Labels and item styles for the renderer |
//! | [`render`] | Canvas 2D drawing |
//! | [`storage`] | `localStorage` persistence backend |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod consts;
pub mod draft;
pub mod engine;
pub mod hit;
pub mod input;
pub mod overlay;
pub mod render;
pub mod storage;
