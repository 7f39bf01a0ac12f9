//! Pointer event routing.
//!
//! The host window delivers raw pointer events; the router turns them
//! into pixel edits or guide updates depending on the active tool. The
//! drag lock and anchor live in an explicit two-state machine owned by
//! the router.

use egui::{Color32, Pos2};

use crate::canvas::Canvas;
use crate::color::color_from_rgb24;
use crate::geometry::IRect;
use crate::tool::Tool;

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
}

impl InputEvent {
    pub fn pos(&self) -> Pos2 {
        match self {
            Self::PointerDown { pos } | Self::PointerMove { pos } | Self::PointerUp { pos } => *pos,
        }
    }
}

/// Externally driven pointer attributes: hit-box size, brush size,
/// draw color and the tool selected in the host's menu.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Size of the pointer's hit-box, used for canvas intersection.
    pub hit_w: i32,
    pub hit_h: i32,
    /// Size of one pencil dab.
    pub brush_w: i32,
    pub brush_h: i32,
    pub color: Color32,
    pub tool: Tool,
}

impl PointerState {
    pub fn new(tool: Tool, color: Color32) -> Self {
        Self {
            hit_w: 16,
            hit_h: 16,
            brush_w: 4,
            brush_h: 4,
            color,
            tool,
        }
    }

    /// Same as [`PointerState::new`] for hosts that hand the draw
    /// color over as a packed `0xRRGGBB` value.
    pub fn with_rgb24(tool: Tool, rgb: u32) -> Self {
        Self::new(tool, color_from_rgb24(rgb))
    }

    /// The hit-box with its top-left corner at the pointer position.
    pub fn hit_rect(&self, pos: Pos2) -> IRect {
        IRect::new(pos.x as i32, pos.y as i32, self.hit_w, self.hit_h)
    }
}

/// Drag lifecycle. The tool and anchor recorded at drag start travel
/// with the state, so a mid-drag tool switch cannot change what gets
/// committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { tool: Tool, anchor: Pos2 },
}

/// Consumes pointer events and drives the canvas.
pub struct InputRouter {
    state: DragState,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    pub fn new() -> Self {
        Self { state: DragState::Idle }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Apply one pointer event to the canvas.
    ///
    /// Down locks only when the hit-box intersects the canvas; move is
    /// ignored unless locked and still over the canvas, which freezes
    /// the guide at its last value while the pointer is outside; up
    /// always unlocks and commits the active guide, deliberately
    /// without re-checking intersection.
    pub fn route(&mut self, event: InputEvent, pointer: &PointerState, canvas: &mut Canvas) {
        match event {
            InputEvent::PointerDown { pos } => {
                if self.is_locked() {
                    return;
                }
                if !pointer.hit_rect(pos).intersects(&canvas.bounds()) {
                    return;
                }
                match pointer.tool {
                    Tool::Pencil => {
                        self.state = DragState::Dragging { tool: Tool::Pencil, anchor: pos };
                        canvas.pencil_dab(pos, pointer);
                    }
                    tool if tool.is_shape() => {
                        self.state = DragState::Dragging { tool, anchor: pos };
                    }
                    _ => {}
                }
            }

            InputEvent::PointerMove { pos } => {
                let DragState::Dragging { tool, anchor } = self.state else {
                    return;
                };
                if !pointer.hit_rect(pos).intersects(&canvas.bounds()) {
                    return;
                }
                match tool {
                    Tool::Pencil => canvas.pencil_dab(pos, pointer),
                    Tool::Rectangle => canvas.update_rect_guide(anchor, pos),
                    Tool::Circle => canvas.update_circle_guide(anchor, pos),
                    Tool::Line => canvas.update_line_guide(anchor, pos),
                    _ => {}
                }
            }

            InputEvent::PointerUp { .. } => {
                let finished = std::mem::replace(&mut self.state, DragState::Idle);
                if let DragState::Dragging { tool, .. } = finished {
                    match tool {
                        Tool::Rectangle => canvas.commit_rect(pointer.color),
                        Tool::Circle => canvas.commit_circle(pointer.color),
                        Tool::Line => canvas.commit_line(pointer.color),
                        // Pencil already painted on down/move.
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position_accessor() {
        let pos = Pos2::new(3.0, 4.0);
        assert_eq!(InputEvent::PointerDown { pos }.pos(), pos);
        assert_eq!(InputEvent::PointerMove { pos }.pos(), pos);
        assert_eq!(InputEvent::PointerUp { pos }.pos(), pos);
    }

    #[test]
    fn test_router_starts_idle() {
        let router = InputRouter::new();
        assert_eq!(router.state(), DragState::Idle);
        assert!(!router.is_locked());
    }

    #[test]
    fn test_pointer_state_from_rgb24() {
        let pointer = PointerState::with_rgb24(Tool::Pencil, 0xFF8800);
        assert_eq!(pointer.color, Color32::from_rgb(0xFF, 0x88, 0x00));
        assert_eq!(pointer.tool, Tool::Pencil);
    }

    #[test]
    fn test_hit_rect_uses_pointer_position() {
        let pointer = PointerState::new(Tool::Pencil, Color32::BLACK);
        let rect = pointer.hit_rect(Pos2::new(10.5, 20.5));
        assert_eq!(rect, IRect::new(10, 20, 16, 16));
    }
}
