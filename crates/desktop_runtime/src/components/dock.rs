use leptos::*;

use super::{
    dock_item_dom_id, element_client_rect, is_primary_press, pointer_from_pointer_event,
    stop_pointer_event, use_desktop_runtime, use_pointer_capture,
};
use crate::{
    apps,
    dock::{self, DockDragSession},
    i18n::translate,
    model::{DesktopApp, DesktopState, Orientation, TRASH_APP_ID},
    reducer::DesktopAction,
};

/// Slot centers along the dock axis, in client coordinates, in navigator order.
fn measure_slot_centers(state: &DesktopState) -> Vec<i32> {
    let centers: Option<Vec<i32>> = state
        .nav_apps
        .iter()
        .map(|app| {
            element_client_rect(&dock_item_dom_id(&app.id))
                .map(|rect| dock::primary_axis(state.orientation, rect.center()))
        })
        .collect();
    centers.unwrap_or_default()
}

fn drag_transform(
    session: Option<&DockDragSession>,
    app_id: &str,
    orientation: Orientation,
) -> String {
    match session {
        Some(session) if session.dragging && session.app_id == app_id => {
            let offset = session.visual_offset(orientation);
            format!("transform:translate({}px,{}px);", offset.x, offset.y)
        }
        _ => String::new(),
    }
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[component]
/// Icon (or glyph fallback) for a dock entry.
fn DockIcon(app_id: String, name: String) -> impl IntoView {
    match apps::icon_asset(&app_id) {
        Some(src) => {
            view! { <img class="dock-icon" src=src alt="" draggable="false" /> }.into_view()
        }
        None => view! {
            <span class="dock-icon dock-icon-glyph" aria-hidden="true">
                {apps::placeholder_glyph(&name)}
            </span>
        }
        .into_view(),
    }
}

#[component]
fn DockAppItem(app: DesktopApp) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let capture = use_pointer_capture();
    let app_id = store_value(app.id.clone());

    let is_dragged = move || {
        runtime.interaction.with(|i| {
            i.dock_drag()
                .is_some_and(|s| s.dragging && s.app_id == app_id.get_value())
        })
    };
    let is_open = move || state.with(|s| s.window(&app_id.get_value()).is_some());
    let style = move || {
        let orientation = state.with(|s| s.orientation);
        runtime
            .interaction
            .with(|i| drag_transform(i.dock_drag(), &app_id.get_value(), orientation))
    };

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        stop_pointer_event(&ev);
        capture.hold(&ev);
        let slot_centers = state.with_untracked(measure_slot_centers);
        runtime.dispatch_action(DesktopAction::BeginDockDrag {
            app_id: app_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
            slot_centers,
            trash_rect: element_client_rect(&dock_item_dom_id(TRASH_APP_ID)),
        });
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ActivateApp {
                app_id: app_id.get_value(),
            });
        }
    };

    view! {
        <li
            id=dock_item_dom_id(&app.id)
            class="dock-slot"
            class:dragging=is_dragged
            class:open=is_open
            style=style
        >
            <button
                type="button"
                class="dock-item"
                title=app.name.clone()
                aria-label=app.name.clone()
                on:pointerdown=on_pointerdown
                on:keydown=on_keydown
            >
                <DockIcon app_id=app.id.clone() name=app.name.clone() />
            </button>
        </li>
    }
}

#[component]
/// App navigator: reorderable app icons plus the fixed trash entry.
pub(super) fn AppNavigator() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let near_trash = move || {
        runtime
            .interaction
            .with(|i| i.dock_drag().is_some_and(|s| s.dragging && s.near_trash))
    };
    let trash_label = move || state.with(|s| translate(s.locale, "trash.title"));
    let trash_has_items = move || state.with(|s| !s.trashed_apps.is_empty());
    let open_trash = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ActivateApp {
            app_id: TRASH_APP_ID.to_string(),
        });
    };

    view! {
        <nav
            class="app-navigator"
            data-orientation=move || state.with(|s| s.orientation.as_str())
            class:dock-dragging=move || runtime.interaction.with(|i| i.is_dock_dragging())
        >
            <ul class="dock-list">
                <For
                    each=move || state.with(|s| s.nav_apps.clone())
                    key=|app| app.id.clone()
                    let:app
                >
                    <DockAppItem app=app />
                </For>
                <li
                    id=dock_item_dom_id(TRASH_APP_ID)
                    class="dock-slot dock-trash"
                    class:near-trash=near_trash
                    class:has-items=trash_has_items
                >
                    <button
                        type="button"
                        class="dock-item"
                        title=trash_label
                        aria-label=trash_label
                        on:click=open_trash
                    >
                        <DockIcon app_id=TRASH_APP_ID.to_string() name="Trash".to_string() />
                    </button>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Point;

    fn dragging_session() -> DockDragSession {
        let mut session =
            DockDragSession::new("store", Point::new(100, 700), vec![100, 160, 220], 0, None);
        session.pointer = Point::new(130, 705);
        session.dragging = true;
        session
    }

    #[test]
    fn only_the_dragged_item_is_translated() {
        let session = dragging_session();
        assert_eq!(
            drag_transform(Some(&session), "store", Orientation::Bottom),
            "transform:translate(30px,5px);"
        );
        assert_eq!(drag_transform(Some(&session), "settings", Orientation::Bottom), "");
        assert_eq!(drag_transform(None, "store", Orientation::Bottom), "");
    }

    #[test]
    fn press_below_threshold_is_not_translated() {
        let mut session = dragging_session();
        session.dragging = false;
        assert_eq!(drag_transform(Some(&session), "store", Orientation::Bottom), "");
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
