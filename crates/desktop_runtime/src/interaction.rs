//! Pointer gesture state machine shared by windows and the dock.
//!
//! Exactly one gesture runs at a time. Pointer-up and pointer-cancel always return to
//! [`PointerInteraction::Idle`], whatever the reducer does with the finished gesture.

use crate::{
    dock::DockDragSession,
    geometry::ResizeDirection,
    model::{Point, WindowGeometry},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSession {
    pub app_id: String,
    pub pointer_start: Point,
    pub origin_start: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: String,
    pub direction: ResizeDirection,
    pub pointer_start: Point,
    pub geometry_start: WindowGeometry,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PointerInteraction {
    #[default]
    Idle,
    MovingWindow(MoveSession),
    ResizingWindow(ResizeSession),
    DockDrag(DockDragSession),
}

impl PointerInteraction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::MovingWindow(_) => "moving-window",
            Self::ResizingWindow(_) => "resizing-window",
            Self::DockDrag(_) => "dock-drag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient UI interaction state, kept apart from [`crate::model::DesktopState`].
pub struct InteractionState {
    pub gesture: PointerInteraction,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, PointerInteraction::Idle)
    }

    /// Whether a dock icon press is in progress (before or after the drag threshold).
    pub fn is_dock_dragging(&self) -> bool {
        matches!(self.gesture, PointerInteraction::DockDrag(_))
    }

    pub fn dock_drag(&self) -> Option<&DockDragSession> {
        match &self.gesture {
            PointerInteraction::DockDrag(session) => Some(session),
            _ => None,
        }
    }

    /// Starts `next` if no other gesture is active. Returns the name of the blocking gesture
    /// otherwise.
    pub fn begin(&mut self, next: PointerInteraction) -> Result<(), &'static str> {
        if !self.is_idle() {
            return Err(self.gesture.name());
        }
        self.gesture = next;
        Ok(())
    }

    /// Ends the current gesture and hands it back.
    pub fn finish(&mut self) -> PointerInteraction {
        std::mem::take(&mut self.gesture)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn move_session() -> PointerInteraction {
        PointerInteraction::MovingWindow(MoveSession {
            app_id: "store".to_string(),
            pointer_start: Point::new(0, 0),
            origin_start: Point::new(300, 300),
        })
    }

    #[test]
    fn second_gesture_is_rejected_while_one_is_active() {
        let mut interaction = InteractionState::default();
        interaction.begin(move_session()).expect("first gesture");

        let dock = PointerInteraction::DockDrag(DockDragSession::new(
            "store",
            Point::new(0, 0),
            vec![10],
            0,
            None,
        ));
        assert_eq!(interaction.begin(dock), Err("moving-window"));
        assert!(!interaction.is_dock_dragging());
    }

    #[test]
    fn finish_always_returns_to_idle() {
        let mut interaction = InteractionState::default();
        interaction.begin(move_session()).expect("begin");

        assert_eq!(interaction.finish(), move_session());
        assert!(interaction.is_idle());
        assert_eq!(interaction.finish(), PointerInteraction::Idle);
    }
}
