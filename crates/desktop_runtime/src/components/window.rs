use leptos::*;

use super::{
    dock_icon_rect_in_window_manager, is_primary_press, pointer_from_pointer_event,
    settings::SettingsPanel, stop_pointer_event, trash::TrashPanel, use_desktop_runtime,
    use_pointer_capture,
};
use crate::{
    apps::{self, WindowContent},
    geometry::{self, ResizeDirection},
    i18n::translate,
    interaction::PointerInteraction,
    model::DesktopWindow,
    reducer::DesktopAction,
};

fn window_style(window: &DesktopWindow) -> String {
    let origin = geometry::presented_origin(window);
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        origin.x, origin.y, window.size.width, window.size.height, window.z_index
    )
}

/// Edges and corners that get a resize handle. Maximized windows have none.
fn resize_handle_directions(maximized: bool) -> Vec<ResizeDirection> {
    if maximized {
        Vec::new()
    } else {
        ResizeDirection::ALL.to_vec()
    }
}

fn gesture_targets(gesture: &PointerInteraction, app_id: &str) -> bool {
    match gesture {
        PointerInteraction::MovingWindow(session) => session.app_id == app_id,
        PointerInteraction::ResizingWindow(session) => session.app_id == app_id,
        _ => false,
    }
}

#[component]
/// One managed window: header controls, resize handles, and routed content.
pub(super) fn DesktopWindowView(app_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let capture = use_pointer_capture();
    let app_id = store_value(app_id);

    let window = create_memo(move |_| state.with(|s| s.window(&app_id.get_value()).cloned()));
    let is_active = move || {
        state.with(|s| s.active_window_id.as_deref() == Some(app_id.get_value().as_str()))
    };
    let is_interacting = move || {
        runtime
            .interaction
            .with(|i| gesture_targets(&i.gesture, &app_id.get_value()))
    };
    let is_maximized = move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized));
    let is_minimized = move || window.with(|w| w.as_ref().is_some_and(|w| w.minimized));
    let title = move || state.with(|s| apps::window_title(s, &app_id.get_value()));
    let label = move |key: &'static str| move || state.with(|s| translate(s.locale, key));

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow {
            app_id: app_id.get_value(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || is_maximized() {
            return;
        }
        stop_pointer_event(&ev);
        capture.hold(&ev);
        runtime.dispatch_action(DesktopAction::FocusWindow {
            app_id: app_id.get_value(),
        });
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id: app_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            app_id: app_id.get_value(),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let id = app_id.get_value();
        let target = geometry::minimize_target(
            dock_icon_rect_in_window_manager(&id),
            state.with_untracked(|s| s.container),
        );
        runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id: id, target });
    };
    let maximize = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        toggle_maximize();
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::CloseWindow {
            app_id: app_id.get_value(),
        });
    };
    let swallow_pointerdown = |ev: web_sys::PointerEvent| ev.stop_propagation();

    let resize_handles = move || {
        resize_handle_directions(is_maximized())
            .into_iter()
            .map(move |direction| {
                let begin_resize = move |ev: web_sys::PointerEvent| {
                    if !is_primary_press(&ev) {
                        return;
                    }
                    stop_pointer_event(&ev);
                    capture.hold(&ev);
                    runtime.dispatch_action(DesktopAction::FocusWindow {
                        app_id: app_id.get_value(),
                    });
                    runtime.dispatch_action(DesktopAction::BeginResize {
                        app_id: app_id.get_value(),
                        direction,
                        pointer: pointer_from_pointer_event(&ev),
                    });
                };
                view! {
                    <div
                        class=format!("window-resize-handle resize-{}", direction.token())
                        data-direction=direction.token()
                        aria-hidden="true"
                        on:pointerdown=begin_resize
                    />
                }
            })
            .collect_view()
    };

    let content = move || match apps::window_content(&app_id.get_value()) {
        WindowContent::Settings => view! { <SettingsPanel /> }.into_view(),
        WindowContent::Trash => view! { <TrashPanel /> }.into_view(),
        WindowContent::Placeholder => view! {
            <p class="window-placeholder">
                {move || {
                    let text = state.with(|s| translate(s.locale, "window.placeholder"));
                    format!("{text} {}", app_id.get_value())
                }}
            </p>
        }
        .into_view(),
    };

    view! {
        <section
            class="desktop-window"
            class:active=is_active
            class:minimized=is_minimized
            class:maximized=is_maximized
            class:interacting=is_interacting
            style=move || window.with(|w| w.as_ref().map(window_style).unwrap_or_default())
            role="dialog"
            aria-label=title
            aria-hidden=move || is_minimized().to_string()
            data-app-id=move || app_id.get_value()
            on:pointerdown=focus
        >
            <header
                class="window-titlebar"
                on:pointerdown=begin_move
                on:dblclick=move |_| toggle_maximize()
            >
                <span class="window-title">{title}</span>
                <div class="window-controls">
                    <button
                        type="button"
                        class="window-control minimize"
                        aria-label=label("window.minimize")
                        on:pointerdown=swallow_pointerdown
                        on:click=minimize
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        class="window-control maximize"
                        aria-label=move || {
                            let key = if is_maximized() {
                                "window.restore"
                            } else {
                                "window.maximize"
                            };
                            state.with(|s| translate(s.locale, key))
                        }
                        on:pointerdown=swallow_pointerdown
                        on:click=maximize
                    >
                        "□"
                    </button>
                    <button
                        type="button"
                        class="window-control close"
                        aria-label=label("window.close")
                        on:pointerdown=swallow_pointerdown
                        on:click=close
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">{content}</div>
            {resize_handles}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{interaction::MoveSession, model::Point};

    #[test]
    fn minimized_window_is_styled_around_its_target() {
        let mut window = DesktopWindow::new("store", 3);
        assert_eq!(
            window_style(&window),
            "left:300px;top:300px;width:450px;height:300px;z-index:3;"
        );

        window.minimized = true;
        window.minimize_target = Some(Point::new(500, 700));
        assert_eq!(
            window_style(&window),
            "left:275px;top:550px;width:450px;height:300px;z-index:3;"
        );
    }

    #[test]
    fn interacting_class_follows_the_gesture_owner() {
        let gesture = PointerInteraction::MovingWindow(MoveSession {
            app_id: "store".to_string(),
            pointer_start: Point::new(0, 0),
            origin_start: Point::new(0, 0),
        });
        assert!(gesture_targets(&gesture, "store"));
        assert!(!gesture_targets(&gesture, "settings"));
        assert!(!gesture_targets(&PointerInteraction::Idle, "store"));
    }

    #[test]
    fn maximized_windows_get_no_resize_handles() {
        assert!(resize_handle_directions(true).is_empty());
        let handles = resize_handle_directions(false);
        assert_eq!(handles.len(), 8);
        assert_eq!(handles, ResizeDirection::ALL.to_vec());
    }
}
