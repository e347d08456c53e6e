//! Editor state machine for drawing and manipulating segments.
//!
//! One pointer gesture is one state-machine episode:
//!
//! ```text
//! Idle -> Drawing     (pointer down on empty space; a degenerate segment is appended)
//! Idle -> Moving      (pointer down on a segment's start handle)
//! Idle -> Rotating    (pointer down on a segment's end handle)
//! Any  -> Idle        (pointer up)
//! ```

use crate::input::PointerEvent;
use crate::segment::{Endpoint, Segment};
use kurbo::{Point, Vec2};

/// Interaction state of the editor.
///
/// Active segments are addressed by index into the append-only segment
/// collection, so an index recorded at pointer-down stays valid for the
/// whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A new segment is being drawn; its end follows the pointer.
    Drawing {
        /// Index of the segment being drawn.
        segment: usize,
    },
    /// A segment is being dragged by its start handle.
    Moving {
        /// Index of the segment being moved.
        segment: usize,
        /// Pointer position at the previous event, for delta computation.
        last_pos: Point,
    },
    /// A segment's end follows the pointer, pivoting around its start.
    Rotating {
        /// Index of the segment being rotated.
        segment: usize,
        /// Pointer position where the gesture began. Not updated while
        /// rotating; rotation tracks the absolute pointer position.
        last_pos: Point,
    },
}

impl EditorState {
    /// Whether any gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, EditorState::Idle)
    }

    /// Whether a new segment is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// Whether a segment is being moved by its start handle.
    pub fn is_moving(&self) -> bool {
        matches!(self, EditorState::Moving { .. })
    }

    /// Whether a segment is being rotated by its end handle.
    pub fn is_rotating(&self) -> bool {
        matches!(self, EditorState::Rotating { .. })
    }
}

/// Owns the segment collection and interprets pointer events.
///
/// Handlers return `true` when segments changed and the surface should be
/// redrawn (full clear, then every segment in collection order).
#[derive(Debug, Clone, Default)]
pub struct Editor {
    /// All segments in creation order. Append-only; nothing deletes.
    segments: Vec<Segment>,
    /// Current interaction state.
    state: EditorState,
}

impl Editor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// All segments in creation order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current interaction state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Pointer position remembered by an in-progress Moving or Rotating
    /// gesture, cleared by pointer-up.
    pub fn last_pointer_pos(&self) -> Option<Point> {
        match self.state {
            EditorState::Moving { last_pos, .. } | EditorState::Rotating { last_pos, .. } => {
                Some(last_pos)
            }
            _ => None,
        }
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Begin a gesture: grab an endpoint handle of an existing segment, or
    /// start drawing a new segment on empty space.
    ///
    /// Every segment's selection flag is re-evaluated. When several
    /// overlapping segments hit, the one latest in creation order wins and
    /// all others are deselected, so at most one segment is ever selected.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        let mut hit = None;
        for (index, segment) in self.segments.iter_mut().enumerate() {
            segment.selected = false;
            if segment.hit_test(point).is_some() {
                hit = Some(index);
            }
        }

        match hit {
            Some(index) => {
                self.segments[index].selected = true;
                // Re-test the winner to classify which handle was grabbed.
                match self.segments[index].hit_test(point) {
                    Some(Endpoint::Start) => {
                        self.state = EditorState::Moving {
                            segment: index,
                            last_pos: point,
                        };
                        log::debug!("moving segment {}", index);
                    }
                    Some(Endpoint::End) => {
                        self.state = EditorState::Rotating {
                            segment: index,
                            last_pos: point,
                        };
                        log::debug!("rotating segment {}", index);
                    }
                    None => {
                        // Unreachable after a successful sweep hit; left as a
                        // guard so a mis-sequenced gesture lands in Idle
                        // instead of resuming a stale one.
                        self.state = EditorState::Idle;
                    }
                }
            }
            None => {
                self.segments.push(Segment::from_point(point));
                let index = self.segments.len() - 1;
                self.state = EditorState::Drawing { segment: index };
                log::debug!("drawing segment {}", index);
            }
        }
        true
    }

    /// Advance the current gesture to a new pointer position.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        match self.state {
            EditorState::Idle => false,
            EditorState::Drawing { segment } => {
                let Some(seg) = self.segments.get_mut(segment) else {
                    return false;
                };
                seg.set_end(point);
                true
            }
            EditorState::Moving { segment, last_pos } => {
                let delta = Vec2::new(point.x - last_pos.x, point.y - last_pos.y);
                let Some(seg) = self.segments.get_mut(segment) else {
                    return false;
                };
                if !seg.selected {
                    return false;
                }
                seg.translate(delta);
                self.state = EditorState::Moving {
                    segment,
                    last_pos: point,
                };
                true
            }
            EditorState::Rotating { segment, .. } => {
                let Some(seg) = self.segments.get_mut(segment) else {
                    return false;
                };
                if !seg.selected {
                    return false;
                }
                seg.set_end(point);
                true
            }
        }
    }

    /// End the current gesture. Selection flags are left as they are until
    /// the next pointer-down re-evaluates them.
    pub fn pointer_up(&mut self) -> bool {
        if self.state.is_active() {
            log::debug!("gesture finished");
        }
        self.state = EditorState::Idle;
        false
    }
}
