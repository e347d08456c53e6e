//! Pointer events delivered by the hosting environment.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch/stylus handling.
///
/// Positions are in surface-local coordinates. `Up` carries no position
/// because releasing a gesture does not depend on where it happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
}
