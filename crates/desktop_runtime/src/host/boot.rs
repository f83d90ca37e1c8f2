use leptos::{create_effect, logging, spawn_local, SignalGetUntracked};

use crate::{
    host::DesktopHostContext,
    persistence,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_hydration(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let theme = runtime.state.get_untracked().theme;
        host.theme_sink().apply_theme(theme.as_str());
        logging::log!("desktop boot on {} host", host.host_strategy_name());

        runtime.dispatch_action(DesktopAction::LoadBackgroundImage);

        let host = host.clone();
        spawn_local(async move {
            if let Some(locale) = persistence::load_locale(&host).await {
                runtime.dispatch_action(DesktopAction::HydrateLocale { locale });
            }
        });
    });
}
