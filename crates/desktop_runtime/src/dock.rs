//! App navigator (dock) engine: drag threshold, live reorder, trash hit-testing, restore.

use crate::{
    geometry::Rect,
    model::{DesktopApp, DesktopState, Orientation, Point},
};

/// Pointer travel (px) after which a dock press turns into a drag.
pub const DRAG_THRESHOLD_PX: i32 = 4;
/// Margin (px) added around the trash icon for proximity feedback and drops.
pub const TRASH_HIT_MARGIN_PX: i32 = 20;
/// Sound cue played when an app lands in the trash.
pub const TRASH_SOUND_CUE: &str = "trash";

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-flight dock icon drag.
pub struct DockDragSession {
    pub app_id: String,
    pub pointer_start: Point,
    pub pointer: Point,
    /// Slot centers along the primary axis, captured at drag start.
    pub slot_centers: Vec<i32>,
    /// Slot the dragged app occupied at press.
    pub start_index: usize,
    /// Slot currently occupied by the dragged app.
    pub index: usize,
    /// Trash icon rectangle in client coordinates, when rendered.
    pub trash_rect: Option<Rect>,
    /// Set once the pointer moved past [`DRAG_THRESHOLD_PX`].
    pub dragging: bool,
    pub near_trash: bool,
}

impl DockDragSession {
    pub fn new(
        app_id: impl Into<String>,
        pointer: Point,
        slot_centers: Vec<i32>,
        index: usize,
        trash_rect: Option<Rect>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            pointer_start: pointer,
            pointer,
            slot_centers,
            start_index: index,
            index,
            trash_rect,
            dragging: false,
            near_trash: false,
        }
    }

    /// Translation that keeps the dragged icon under the pointer from its current slot.
    pub fn visual_offset(&self, orientation: Orientation) -> Point {
        let slot_shift = match (
            self.slot_centers.get(self.index),
            self.slot_centers.get(self.start_index),
        ) {
            (Some(current), Some(start)) => current - start,
            _ => 0,
        };
        let dx = self.pointer.x - self.pointer_start.x;
        let dy = self.pointer.y - self.pointer_start.y;
        if orientation.is_horizontal() {
            Point::new(dx - slot_shift, dy)
        } else {
            Point::new(dx, dy - slot_shift)
        }
    }
}

/// Whether `current` is more than [`DRAG_THRESHOLD_PX`] away from `start`.
pub fn exceeds_drag_threshold(start: Point, current: Point) -> bool {
    let dx = i64::from(current.x - start.x);
    let dy = i64::from(current.y - start.y);
    let threshold = i64::from(DRAG_THRESHOLD_PX);
    dx * dx + dy * dy > threshold * threshold
}

/// Pointer coordinate along the dock's layout axis.
pub fn primary_axis(orientation: Orientation, point: Point) -> i32 {
    if orientation.is_horizontal() {
        point.x
    } else {
        point.y
    }
}

/// Slot the dragged app should occupy once the pointer sits at `pointer_axis`.
///
/// The app moves one neighbor at a time, each time the pointer crosses that neighbor's center.
pub fn reorder_index(slot_centers: &[i32], index: usize, pointer_axis: i32) -> usize {
    if slot_centers.is_empty() {
        return index;
    }
    let mut next = index.min(slot_centers.len().saturating_sub(1));
    while next + 1 < slot_centers.len() && pointer_axis > slot_centers[next + 1] {
        next += 1;
    }
    while next > 0 && pointer_axis < slot_centers[next - 1] {
        next -= 1;
    }
    next
}

/// Moves the app at `from` to `to` through adjacent swaps.
pub fn move_by_swaps(apps: &mut [DesktopApp], from: usize, to: usize) {
    if from >= apps.len() || to >= apps.len() {
        return;
    }
    if from < to {
        for i in from..to {
            apps.swap(i, i + 1);
        }
    } else {
        for i in (to..from).rev() {
            apps.swap(i, i + 1);
        }
    }
}

/// Whether `pointer` is inside the trash rectangle grown by [`TRASH_HIT_MARGIN_PX`].
pub fn is_near_trash(trash_rect: Option<Rect>, pointer: Point) -> bool {
    trash_rect
        .map(|rect| rect.expanded(TRASH_HIT_MARGIN_PX).contains(pointer))
        .unwrap_or(false)
}

/// Moves `app_id` from the navigator into the trash.
///
/// Returns `false` when the app is not in the navigator.
pub fn trash_app(state: &mut DesktopState, app_id: &str) -> bool {
    let Some(index) = state.nav_apps.iter().position(|app| app.id == app_id) else {
        return false;
    };
    let app = state.nav_apps.remove(index);
    if !state.is_trashed(&app.id) {
        state.trashed_apps.push(app);
    }
    true
}

/// Moves one trashed app back to the end of the navigator.
///
/// Returns `false` when the app is not in the trash.
pub fn restore_app(state: &mut DesktopState, app_id: &str) -> bool {
    let Some(index) = state.trashed_apps.iter().position(|app| app.id == app_id) else {
        return false;
    };
    let app = state.trashed_apps.remove(index);
    if !state.nav_apps.iter().any(|nav| nav.id == app.id) {
        state.nav_apps.push(app);
    }
    true
}

/// Moves every trashed app back, in trash order. Returns how many were appended.
pub fn restore_all(state: &mut DesktopState) -> usize {
    let mut restored = 0;
    for app in std::mem::take(&mut state.trashed_apps) {
        if !state.nav_apps.iter().any(|nav| nav.id == app.id) {
            state.nav_apps.push(app);
            restored += 1;
        }
    }
    restored
}
