//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

mod preferences;

use thiserror::Error;

use crate::{
    dock::{self, DockDragSession, TRASH_SOUND_CUE},
    geometry::{self, Rect, ResizeDirection},
    interaction::{InteractionState, MoveSession, PointerInteraction, ResizeSession},
    model::{ContainerSize, DesktopState, Locale, Orientation, Point, Theme},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the app's window, or unminimize/raise the existing one.
    ActivateApp {
        /// App to activate.
        app_id: String,
    },
    /// Mark a window active and raise it.
    FocusWindow {
        /// Window to focus.
        app_id: String,
    },
    /// Background click: clear the active marker.
    ClearActiveWindow,
    /// Close a window. Closing a missing window is a no-op.
    CloseWindow {
        /// Window to close.
        app_id: String,
    },
    /// Minimize a window toward a dock icon.
    MinimizeWindow {
        /// Window to minimize.
        app_id: String,
        /// Point the window collapses toward, in window-manager coordinates.
        target: Point,
    },
    /// Maximize a normal window or restore a maximized one.
    ToggleMaximize {
        /// Window to toggle.
        app_id: String,
    },
    /// Begin dragging a window by its header.
    BeginMove {
        /// Window being dragged.
        app_id: String,
        /// Pointer position at drag start.
        pointer: Point,
    },
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        app_id: String,
        /// Grabbed edge or corner.
        direction: ResizeDirection,
        /// Pointer position at resize start.
        pointer: Point,
    },
    /// Press on a dock icon; becomes a drag past the threshold.
    BeginDockDrag {
        /// App under the pointer.
        app_id: String,
        /// Pointer position at press.
        pointer: Point,
        /// Slot centers along the dock axis, in client coordinates.
        slot_centers: Vec<i32>,
        /// Trash icon rectangle in client coordinates, when rendered.
        trash_rect: Option<Rect>,
    },
    /// Pointer moved while a gesture may be active.
    PointerMove {
        /// Current pointer position.
        pointer: Point,
    },
    /// Pointer released; ends any gesture.
    PointerUp {
        /// Pointer position at release.
        pointer: Point,
    },
    /// Pointer capture lost; ends any gesture without committing a drop or click.
    PointerCancel,
    /// The window-manager surface changed size.
    ContainerResized {
        /// New surface size.
        size: ContainerSize,
    },
    /// Move one trashed app back to the navigator.
    RestoreTrashedApp {
        /// App to restore.
        app_id: String,
    },
    /// Move every trashed app back to the navigator.
    RestoreAllTrashedApps,
    /// Select the light or dark theme.
    SetTheme {
        /// New theme.
        theme: Theme,
    },
    /// Dock the navigator to another screen edge.
    SetOrientation {
        /// New orientation.
        orientation: Orientation,
    },
    /// Change and persist the UI locale.
    SetLocale {
        /// New locale.
        locale: Locale,
    },
    /// Apply the persisted locale at boot.
    HydrateLocale {
        /// Stored locale.
        locale: Locale,
    },
    /// A file was picked for the background.
    SelectBackgroundImage {
        /// MIME type reported by the picker.
        mime_type: String,
        /// File contents.
        bytes: Vec<u8>,
    },
    /// Start loading the stored background image.
    LoadBackgroundImage,
    /// Boot load finished.
    BackgroundImageLoaded {
        /// Display URL of the stored image, if any.
        url: Option<String>,
    },
    /// Save finished; `url` is the new display URL.
    BackgroundImageSaved {
        /// Display URL of the saved image.
        url: String,
    },
    /// Validation or storage failed.
    BackgroundImageFailed {
        /// Translation key or raw text shown to the user.
        message: String,
    },
    /// A picked file failed validation before its bytes were read. Only the error changes.
    BackgroundImageRejected {
        /// Translation key of the validation failure.
        message: String,
    },
    /// Remove the stored background image.
    RemoveBackgroundImage,
    /// Removal finished.
    BackgroundImageCleared,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Persist the current locale preference.
    PersistLocale,
    /// Write the theme token onto the document.
    ApplyTheme(Theme),
    /// Play a named UI sound cue.
    PlaySound(&'static str),
    /// Store a new background image.
    SaveBackgroundImage {
        /// Encoded image bytes.
        bytes: Vec<u8>,
        /// MIME type of `bytes`.
        mime_type: String,
    },
    /// Load the stored background image.
    LoadBackgroundImage,
    /// Delete the stored background image.
    DeleteBackgroundImage,
    /// Release a display URL that is no longer shown.
    RevokeObjectUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions. State is left unchanged when one is returned.
pub enum ReducerError {
    /// No window is open for the app id.
    #[error("window not found: {0}")]
    WindowNotFound(String),
    /// The app id is not where the action expects it.
    #[error("app not found: {0}")]
    AppNotFound(String),
    /// Another pointer gesture is still running.
    #[error("pointer gesture already in progress: {0}")]
    GestureInProgress(&'static str),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references a missing window or app, or starts a
/// gesture while another is active.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    if preferences::reduce_preferences_action(state, &action, &mut effects)? {
        return Ok(effects);
    }

    match action {
        DesktopAction::ActivateApp { app_id } => {
            if !interaction.is_dock_dragging() {
                window_manager::open_or_focus(state, &app_id);
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            if !window_manager::focus(state, &app_id) {
                return Err(ReducerError::WindowNotFound(app_id));
            }
        }
        DesktopAction::ClearActiveWindow => window_manager::clear_active(state),
        DesktopAction::CloseWindow { app_id } => {
            window_manager::close(state, &app_id);
        }
        DesktopAction::MinimizeWindow { app_id, target } => {
            if !window_manager::minimize(state, &app_id, target) {
                return Err(ReducerError::WindowNotFound(app_id));
            }
        }
        DesktopAction::ToggleMaximize { app_id } => {
            if !window_manager::toggle_maximize(state, &app_id) {
                return Err(ReducerError::WindowNotFound(app_id));
            }
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let origin_start = state
                .window(&app_id)
                .map(|w| w.position)
                .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))?;
            interaction
                .begin(PointerInteraction::MovingWindow(MoveSession {
                    app_id: app_id.clone(),
                    pointer_start: pointer,
                    origin_start,
                }))
                .map_err(ReducerError::GestureInProgress)?;
            window_manager::focus(state, &app_id);
        }
        DesktopAction::BeginResize {
            app_id,
            direction,
            pointer,
        } => {
            let geometry_start = state
                .window(&app_id)
                .map(|w| w.geometry())
                .ok_or_else(|| ReducerError::WindowNotFound(app_id.clone()))?;
            interaction
                .begin(PointerInteraction::ResizingWindow(ResizeSession {
                    app_id: app_id.clone(),
                    direction,
                    pointer_start: pointer,
                    geometry_start,
                }))
                .map_err(ReducerError::GestureInProgress)?;
            window_manager::focus(state, &app_id);
        }
        DesktopAction::BeginDockDrag {
            app_id,
            pointer,
            slot_centers,
            trash_rect,
        } => {
            let index = state
                .nav_apps
                .iter()
                .position(|app| app.id == app_id)
                .ok_or_else(|| ReducerError::AppNotFound(app_id.clone()))?;
            interaction
                .begin(PointerInteraction::DockDrag(DockDragSession::new(
                    app_id,
                    pointer,
                    slot_centers,
                    index,
                    trash_rect,
                )))
                .map_err(ReducerError::GestureInProgress)?;
        }
        DesktopAction::PointerMove { pointer } => {
            apply_pointer_move(state, &mut interaction.gesture, pointer);
        }
        DesktopAction::PointerUp { pointer } => {
            let mut gesture = interaction.finish();
            apply_pointer_move(state, &mut gesture, pointer);
            if let PointerInteraction::DockDrag(session) = gesture {
                finish_dock_drag(state, session, &mut effects);
            }
        }
        DesktopAction::PointerCancel => {
            interaction.finish();
        }
        DesktopAction::ContainerResized { size } => {
            window_manager::resize_container(state, size);
        }
        DesktopAction::RestoreTrashedApp { app_id } => {
            if !dock::restore_app(state, &app_id) {
                return Err(ReducerError::AppNotFound(app_id));
            }
        }
        DesktopAction::RestoreAllTrashedApps => {
            dock::restore_all(state);
        }
        _ => {}
    }

    Ok(effects)
}

/// Open and not maximized; closed windows drop their pending gesture updates.
fn window_is_adjustable(state: &DesktopState, app_id: &str) -> bool {
    state.window(app_id).is_some_and(|w| !w.maximized)
}

fn apply_pointer_move(state: &mut DesktopState, gesture: &mut PointerInteraction, pointer: Point) {
    match gesture {
        PointerInteraction::Idle => {}
        PointerInteraction::MovingWindow(session) => {
            if !window_is_adjustable(state, &session.app_id) {
                return;
            }
            let origin = session.origin_start.offset(
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
            );
            window_manager::set_position(state, &session.app_id, origin);
        }
        PointerInteraction::ResizingWindow(session) => {
            if !window_is_adjustable(state, &session.app_id) {
                return;
            }
            let next = geometry::resize_geometry(
                session.geometry_start,
                session.direction,
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
                state.container,
            );
            window_manager::set_geometry(state, &session.app_id, next);
        }
        PointerInteraction::DockDrag(session) => {
            session.pointer = pointer;
            if !session.dragging && dock::exceeds_drag_threshold(session.pointer_start, pointer) {
                session.dragging = true;
            }
            if !session.dragging {
                return;
            }
            session.near_trash = dock::is_near_trash(session.trash_rect, pointer);

            let Some(from) = state.nav_apps.iter().position(|app| app.id == session.app_id) else {
                return;
            };
            let axis = dock::primary_axis(state.orientation, pointer);
            let to = dock::reorder_index(&session.slot_centers, from, axis)
                .min(state.nav_apps.len().saturating_sub(1));
            if to != from {
                dock::move_by_swaps(&mut state.nav_apps, from, to);
            }
            session.index = to;
        }
    }
}

fn finish_dock_drag(
    state: &mut DesktopState,
    session: DockDragSession,
    effects: &mut Vec<RuntimeEffect>,
) {
    if !session.dragging {
        window_manager::open_or_focus(state, &session.app_id);
        return;
    }
    if dock::is_near_trash(session.trash_rect, session.pointer)
        && dock::trash_app(state, &session.app_id)
    {
        effects.push(RuntimeEffect::PlaySound(TRASH_SOUND_CUE));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DesktopApp;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn activate(app_id: &str) -> DesktopAction {
        DesktopAction::ActivateApp {
            app_id: app_id.to_string(),
        }
    }

    fn nav_ids(state: &DesktopState) -> Vec<String> {
        state.nav_apps.iter().map(|app| app.id.clone()).collect()
    }

    fn begin_dock_drag(app_id: &str, pointer: Point) -> DesktopAction {
        DesktopAction::BeginDockDrag {
            app_id: app_id.to_string(),
            pointer,
            slot_centers: vec![100, 160, 220],
            trash_rect: Some(Rect::new(400, 680, 48, 48)),
        }
    }

    #[test]
    fn focus_unknown_window_is_an_error_without_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: "ghost".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::WindowNotFound("ghost".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn moving_window_tracks_pointer_and_clamps_to_container() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, activate("store"));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: "store".to_string(),
                pointer: Point::new(10, 10),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: Point::new(35, 50),
            },
        );
        assert_eq!(state.window("store").unwrap().position, Point::new(325, 340));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: Point::new(5000, -5000),
            },
        );
        assert_eq!(state.window("store").unwrap().position, Point::new(574, 0));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerUp {
                pointer: Point::new(5000, -5000),
            },
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn resize_uses_cumulative_delta_from_gesture_start() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, activate("store"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: "store".to_string(),
                direction: ResizeDirection::West,
                pointer: Point::new(300, 400),
            },
        );
        for x in [280, 260, 250] {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::PointerMove {
                    pointer: Point::new(x, 400),
                },
            );
        }

        let window = state.window("store").unwrap();
        assert_eq!(window.position.x, 250);
        assert_eq!(window.size.width, 500);
        assert_eq!(window.position.x + window.size.width, 750);
    }

    #[test]
    fn second_gesture_is_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, activate("store"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: "store".to_string(),
                pointer: Point::new(0, 0),
            },
        );

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            begin_dock_drag("settings", Point::new(220, 700)),
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::GestureInProgress("moving-window"));
    }

    #[test]
    fn dock_press_without_movement_activates_app() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            begin_dock_drag("settings", Point::new(220, 700)),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: Point::new(222, 701),
            },
        );
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerUp {
                pointer: Point::new(222, 701),
            },
        );

        assert!(effects.is_empty());
        assert!(state.window("settings").is_some());
        assert_eq!(nav_ids(&state), ["app-store", "store", "settings"]);
    }

    #[test]
    fn dock_drag_swaps_live_when_crossing_neighbor_center() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            begin_dock_drag("app-store", Point::new(100, 700)),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: Point::new(165, 700),
            },
        );
        assert_eq!(nav_ids(&state), ["store", "app-store", "settings"]);
        assert_eq!(interaction.dock_drag().map(|s| s.index), Some(1));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerUp {
                pointer: Point::new(165, 700),
            },
        );
        assert_eq!(nav_ids(&state), ["store", "app-store", "settings"]);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn dock_drop_near_trash_moves_app_and_plays_sound() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(
            &mut state,
            &mut interaction,
            begin_dock_drag("store", Point::new(160, 700)),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: Point::new(385, 690),
            },
        );
        assert_eq!(interaction.dock_drag().map(|s| s.near_trash), Some(true));

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerUp {
                pointer: Point::new(385, 690),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound("trash")]);
        assert_eq!(
            state.trashed_apps,
            vec![DesktopApp::new("store", "Store")]
        );
        assert!(!nav_ids(&state).contains(&"store".to_string()));
    }

    #[test]
    fn activation_is_ignored_during_dock_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            begin_dock_drag("store", Point::new(160, 700)),
        );

        reduce(&mut state, &mut interaction, activate("settings"));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn cancel_discards_pending_click_and_drop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            begin_dock_drag("store", Point::new(160, 700)),
        );
        reduce(&mut state, &mut interaction, DesktopAction::PointerCancel);

        assert!(interaction.is_idle());
        assert!(state.windows.is_empty());
        assert!(state.trashed_apps.is_empty());
    }

    #[test]
    fn pointer_up_for_closed_window_still_returns_to_idle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(&mut state, &mut interaction, activate("store"));
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: "store".to_string(),
                direction: ResizeDirection::SouthEast,
                pointer: Point::new(0, 0),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: "store".to_string(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerUp {
                pointer: Point::new(10, 10),
            },
        );
        assert!(interaction.is_idle());
    }
}
