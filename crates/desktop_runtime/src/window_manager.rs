//! Window-manager transition helpers used by the desktop reducer.
//!
//! Windows are keyed by app id. Stack order lives in `z_index` only; the `windows` vector keeps
//! creation order.

use crate::{
    geometry::{self, clamp_to_container},
    model::{ContainerSize, DesktopState, DesktopWindow, Point, WindowGeometry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What [`open_or_focus`] did.
pub enum OpenOutcome {
    Created,
    Restored,
    Focused,
}

/// Raises `app_id` to `max + 1`, unless it is already strictly above every other window.
///
/// Returns `false` when no such window exists.
pub fn raise(state: &mut DesktopState, app_id: &str) -> bool {
    let Some(current) = state.window(app_id).map(|w| w.z_index) else {
        return false;
    };
    let others_top = state
        .windows
        .iter()
        .filter(|w| w.app_id != app_id)
        .map(|w| w.z_index)
        .max();
    let on_top = others_top.map(|top| current > top).unwrap_or(true);
    if !on_top {
        let next = state.top_z_index().saturating_add(1);
        if let Some(window) = state.window_mut(app_id) {
            window.z_index = next;
        }
    }
    true
}

/// Marks `app_id` active and raises it. Returns `false` for unknown windows.
pub fn focus(state: &mut DesktopState, app_id: &str) -> bool {
    if !raise(state, app_id) {
        return false;
    }
    state.active_window_id = Some(app_id.to_string());
    true
}

/// Opens a window for `app_id`, or brings back the one that exists.
pub fn open_or_focus(state: &mut DesktopState, app_id: &str) -> OpenOutcome {
    let outcome = match state.window_mut(app_id) {
        Some(window) if window.minimized => {
            window.minimized = false;
            window.minimize_target = None;
            OpenOutcome::Restored
        }
        Some(_) => OpenOutcome::Focused,
        None => {
            let z_index = state.top_z_index().saturating_add(1);
            let mut window = DesktopWindow::new(app_id, z_index);
            window.set_geometry(clamp_to_container(window.geometry(), state.container));
            state.windows.push(window);
            OpenOutcome::Created
        }
    };
    focus(state, app_id);
    outcome
}

/// Clears the active marker without touching z-order.
pub fn clear_active(state: &mut DesktopState) {
    state.active_window_id = None;
}

/// Removes the window for `app_id`. Closing a missing window is a no-op.
///
/// Returns whether a window was removed.
pub fn close(state: &mut DesktopState, app_id: &str) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.app_id != app_id);
    if state.active_window_id.as_deref() == Some(app_id) {
        state.active_window_id = None;
    }
    state.windows.len() != before
}

/// Minimizes `app_id` toward `target`. Stored geometry is left untouched.
pub fn minimize(state: &mut DesktopState, app_id: &str, target: Point) -> bool {
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.minimized = true;
    window.minimize_target = Some(target);
    if state.active_window_id.as_deref() == Some(app_id) {
        state.active_window_id = None;
    }
    true
}

/// Toggles between the saved geometry and a container-filling one.
///
/// The saved geometry is re-fitted on restore, since the container may have shrunk meanwhile.
pub fn toggle_maximize(state: &mut DesktopState, app_id: &str) -> bool {
    let container = state.container;
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    if window.maximized {
        if let Some(saved) = window.restore_geometry.take() {
            window.set_geometry(clamp_to_container(saved, container));
        }
        window.maximized = false;
    } else {
        window.restore_geometry = Some(window.geometry());
        window.set_geometry(geometry::maximized_geometry(container));
        window.maximized = true;
    }
    true
}

/// Commits a new origin, clamped to the container.
pub fn set_position(state: &mut DesktopState, app_id: &str, position: Point) -> bool {
    let container = state.container;
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.position = geometry::DragConstraints::new(window.size, container).clamp(position);
    true
}

/// Commits a new geometry (size plus the origin a west/north resize moved), fitted to the
/// container.
pub fn set_geometry(state: &mut DesktopState, app_id: &str, next: WindowGeometry) -> bool {
    let container = state.container;
    let Some(window) = state.window_mut(app_id) else {
        return false;
    };
    window.set_geometry(clamp_to_container(next, container));
    true
}

/// Stores the new container size and re-fits every window.
pub fn resize_container(state: &mut DesktopState, container: ContainerSize) {
    state.container = container;
    for window in &mut state.windows {
        geometry::fit_window_to_container(window, container);
    }
}

/// Windows sorted ascending by `z_index`, for rendering.
pub fn render_order(windows: &[DesktopWindow]) -> Vec<DesktopWindow> {
    let mut ordered = windows.to_vec();
    ordered.sort_by_key(|w| w.z_index);
    ordered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Size;

    fn z(state: &DesktopState, app_id: &str) -> u32 {
        state.window(app_id).expect("window").z_index
    }

    #[test]
    fn open_creates_default_window_and_stacks_on_top() {
        let mut state = DesktopState::default();
        assert_eq!(open_or_focus(&mut state, "store"), OpenOutcome::Created);
        let window = state.window("store").expect("store window");
        assert_eq!(window.position, Point::new(300, 300));
        assert_eq!(window.size, Size::new(450, 300));
        assert_eq!(window.z_index, 1);

        assert_eq!(open_or_focus(&mut state, "settings"), OpenOutcome::Created);
        assert_eq!(z(&state, "settings"), 2);
        assert_eq!(state.active_window_id.as_deref(), Some("settings"));

        assert_eq!(open_or_focus(&mut state, "store"), OpenOutcome::Focused);
        assert_eq!(z(&state, "store"), 3);
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn focusing_top_window_keeps_its_z_index() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        open_or_focus(&mut state, "settings");

        assert!(focus(&mut state, "settings"));
        assert_eq!(z(&state, "settings"), 2);
        assert!(!focus(&mut state, "missing"));
    }

    #[test]
    fn minimized_window_is_restored_on_open() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        assert!(minimize(&mut state, "store", Point::new(512, 690)));
        assert_eq!(state.active_window_id, None);

        assert_eq!(open_or_focus(&mut state, "store"), OpenOutcome::Restored);
        let window = state.window("store").expect("window");
        assert!(!window.minimized);
        assert_eq!(window.position, Point::new(300, 300));
        assert_eq!(state.active_window_id.as_deref(), Some("store"));
    }

    #[test]
    fn maximize_round_trip_restores_exact_geometry() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        set_position(&mut state, "store", Point::new(123, 45));
        let before = state.window("store").expect("window").geometry();

        toggle_maximize(&mut state, "store");
        let maximized = state.window("store").expect("window");
        assert!(maximized.maximized);
        assert_eq!(maximized.geometry(), geometry::maximized_geometry(state.container));

        toggle_maximize(&mut state, "store");
        let restored = state.window("store").expect("window");
        assert!(!restored.maximized);
        assert_eq!(restored.geometry(), before);
        assert_eq!(restored.restore_geometry, None);
    }

    #[test]
    fn close_is_idempotent_and_clears_active() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        assert!(close(&mut state, "store"));
        assert_eq!(state.active_window_id, None);
        assert!(!close(&mut state, "store"));
    }

    #[test]
    fn clear_active_leaves_stack_alone() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        open_or_focus(&mut state, "settings");
        let before = state.windows.clone();

        clear_active(&mut state);
        assert_eq!(state.active_window_id, None);
        assert_eq!(state.windows, before);
    }

    #[test]
    fn render_order_sorts_by_z_index() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        open_or_focus(&mut state, "settings");
        open_or_focus(&mut state, "store");

        let order: Vec<String> = render_order(&state.windows)
            .into_iter()
            .map(|w| w.app_id)
            .collect();
        assert_eq!(order, ["settings", "store"]);
    }

    #[test]
    fn set_geometry_is_clamped_to_container() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        let oversized = WindowGeometry {
            position: Point::new(40, 60),
            size: Size::new(5000, 5000),
        };
        assert!(set_geometry(&mut state, "store", oversized));
        let window = state.window("store").expect("window");
        assert_eq!(window.size, Size::new(1024, 730));
        assert_eq!(window.position, Point::new(0, 0));
        assert!(!set_geometry(&mut state, "missing", oversized));
    }

    #[test]
    fn restore_after_container_shrink_stays_inside() {
        let mut state = DesktopState::default();
        open_or_focus(&mut state, "store");
        set_position(&mut state, "store", Point::new(574, 430));
        toggle_maximize(&mut state, "store");

        let smaller = ContainerSize {
            width: 600,
            height: 500,
        };
        resize_container(&mut state, smaller);
        toggle_maximize(&mut state, "store");

        let window = state.window("store").expect("window");
        assert!(!window.maximized);
        assert_eq!(window.size, Size::new(450, 300));
        assert_eq!(window.position, Point::new(150, 200));
        assert!(window.position.x + window.size.width <= smaller.width);
        assert!(window.position.y + window.size.height <= smaller.height);
    }
}
