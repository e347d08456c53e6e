//! Linepad Core Library
//!
//! Platform-agnostic segment entities and the pointer interaction state
//! machine for the Linepad line editor.

pub mod editor;
pub mod input;
pub mod segment;

pub use editor::{Editor, EditorState};
pub use input::PointerEvent;
pub use segment::{Endpoint, Segment, ENDPOINT_CAPTURE_RADIUS, LINE_HIT_TOLERANCE};
