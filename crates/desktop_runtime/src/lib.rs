//! Desktop shell runtime: state model, reducer, host effects, and Leptos UI.

pub mod apps;
pub mod background_image;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod i18n;
pub mod interaction;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use i18n::translate;
pub use interaction::{InteractionState, PointerInteraction};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
