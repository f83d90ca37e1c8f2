//! Desktop shell UI composition and pointer interaction surfaces.

mod dock;
mod settings;
mod trash;
mod window;

use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use self::{dock::AppNavigator, window::DesktopWindowView};
use crate::{
    geometry::Rect,
    model::{ContainerSize, DesktopState, Point},
    reducer::DesktopAction,
    window_manager,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const WINDOW_MANAGER_DOM_ID: &str = "desktop-window-manager";

/// Releases pointer capture on drop, so every gesture exit path lets go of the pointer.
pub(crate) struct PointerCaptureGuard {
    element: web_sys::Element,
    pointer_id: i32,
}

impl PointerCaptureGuard {
    fn acquire(ev: &web_sys::PointerEvent) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
            element.set_pointer_capture(ev.pointer_id()).ok()?;
            Some(Self {
                element,
                pointer_id: ev.pointer_id(),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ev;
            None
        }
    }
}

impl Drop for PointerCaptureGuard {
    fn drop(&mut self) {
        let _ = self.element.release_pointer_capture(self.pointer_id);
    }
}

#[derive(Clone, Copy)]
struct PointerCaptureSlot(StoredValue<Option<PointerCaptureGuard>>);

impl PointerCaptureSlot {
    fn hold(self, ev: &web_sys::PointerEvent) {
        self.0.set_value(PointerCaptureGuard::acquire(ev));
    }

    fn release(self) {
        self.0.set_value(None);
    }
}

fn use_pointer_capture() -> PointerCaptureSlot {
    use_context::<PointerCaptureSlot>().expect("PointerCaptureSlot not provided")
}

/// Primary-button (or primary touch/pen) presses only.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn element_client_rect(dom_id: &str) -> Option<Rect> {
    let element = document().get_element_by_id(dom_id)?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(
        rect.left().round() as i32,
        rect.top().round() as i32,
        rect.width().round() as i32,
        rect.height().round() as i32,
    ))
}

/// DOM id of the dock item for `app_id`.
pub(crate) fn dock_item_dom_id(app_id: &str) -> String {
    format!("dock-item-{app_id}")
}

/// Dock icon rectangle translated into window-manager coordinates.
fn dock_icon_rect_in_window_manager(app_id: &str) -> Option<Rect> {
    let icon = element_client_rect(&dock_item_dom_id(app_id))?;
    let surface = element_client_rect(WINDOW_MANAGER_DOM_ID)?;
    Some(icon.translated(-surface.x, -surface.y))
}

fn measure_container() -> Option<ContainerSize> {
    let rect = element_client_rect(WINDOW_MANAGER_DOM_ID)?;
    Some(ContainerSize {
        width: rect.width,
        height: rect.height,
    })
}

fn background_style(state: &DesktopState) -> String {
    match &state.background.url {
        Some(url) => format!("background-image:url('{url}');"),
        None => String::new(),
    }
}

#[component]
/// Renders the desktop shell: background, window manager surface, and app navigator.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let capture = PointerCaptureSlot(store_value(None));
    provide_context(capture);

    let surface_ref = create_node_ref::<html::Div>();
    create_effect(move |_| {
        if surface_ref.get().is_some() {
            if let Some(size) = measure_container() {
                runtime.dispatch_action(DesktopAction::ContainerResized { size });
            }
        }
    });
    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some(size) = measure_container() {
            runtime.dispatch_action(DesktopAction::ContainerResized { size });
        }
    });
    on_cleanup(move || resize_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.gesture_idle() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMove {
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        capture.release();
        if runtime.gesture_idle() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerUp {
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let on_pointer_cancel = move |_: web_sys::PointerEvent| {
        capture.release();
        runtime.dispatch_action(DesktopAction::PointerCancel);
    };
    let on_surface_pointerdown = move |ev: web_sys::PointerEvent| {
        let on_background = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if on_background {
            runtime.dispatch_action(DesktopAction::ClearActiveWindow);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-theme=move || state.with(|s| s.theme.as_str())
            data-orientation=move || state.with(|s| s.orientation.as_str())
            lang=move || state.with(|s| s.locale.code())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            <div
                class="desktop-background"
                style=move || state.with(background_style)
                aria-hidden="true"
            />
            <div
                id=WINDOW_MANAGER_DOM_ID
                class="window-manager"
                node_ref=surface_ref
                on:pointerdown=on_surface_pointerdown
            >
                <For
                    each=move || state.with(|s| window_manager::render_order(&s.windows))
                    key=|win| win.app_id.clone()
                    let:win
                >
                    <DesktopWindowView app_id=win.app_id />
                </For>
            </div>
            <AppNavigator />
        </div>
    }
}
