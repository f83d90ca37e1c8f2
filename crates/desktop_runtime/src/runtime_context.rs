//! Reducer container, effect queue, and context plumbing behind [`DesktopProvider`].
//!
//! Components read signals from [`DesktopRuntimeContext`] and send every change through
//! [`DesktopRuntimeContext::dispatch_action`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    interaction::InteractionState,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Handle shared with every shell component.
pub struct DesktopRuntimeContext {
    /// Injected host services used by effect execution.
    pub host: StoredValue<DesktopHostContext>,
    /// Desktop model: apps, windows, preferences.
    pub state: RwSignal<DesktopState>,
    /// Gesture in progress, kept apart from the model.
    pub interaction: RwSignal<InteractionState>,
    /// Effects waiting for [`effect_executor`].
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Runs the reducer and commits its result.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Sends `action` through the reducer.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Whether no pointer gesture is running, read without tracking.
    pub fn gesture_idle(&self) -> bool {
        self.interaction.with_untracked(InteractionState::is_idle)
    }
}

/// Reduces `action` against untracked copies and writes back only what changed.
fn commit_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let mut next_state = state.get_untracked();
    let mut next_interaction = interaction.get_untracked();

    let queued = match reduce_desktop(&mut next_state, &mut next_interaction, action) {
        Ok(queued) => queued,
        Err(err) => {
            logging::warn!("desktop action rejected: {err}");
            return;
        }
    };

    if state.with_untracked(|current| *current != next_state) {
        state.set(next_state);
    }
    if interaction.with_untracked(|current| *current != next_interaction) {
        interaction.set(next_interaction);
    }
    if !queued.is_empty() {
        effects.update(|pending| pending.extend(queued));
    }
}

#[component]
/// Owns desktop state for its subtree and starts boot hydration against `host_services`.
pub fn DesktopProvider(
    /// Browser or headless services chosen by the entry crate.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let runtime = DesktopRuntimeContext {
        host: store_value(DesktopHostContext::new(host_services)),
        state,
        interaction,
        effects,
        dispatch: Callback::new(move |action| commit_action(state, interaction, effects, action)),
    };
    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the [`DesktopRuntimeContext`] provided by the nearest [`DesktopProvider`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
