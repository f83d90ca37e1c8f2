use leptos::*;

use super::use_desktop_runtime;
use crate::{apps, i18n::translate, reducer::DesktopAction};

#[component]
/// Trash window body: trashed apps with per-item and bulk restore.
pub(super) fn TrashPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let t = move |key: &'static str| move || state.with(|s| translate(s.locale, key));
    let is_empty = move || state.with(|s| s.trashed_apps.is_empty());

    let restore_all = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::RestoreAllTrashedApps);
    };

    view! {
        <div class="trash-panel">
            <header class="trash-header">
                <p class="trash-description">{t("trash.description")}</p>
                <button
                    type="button"
                    class="trash-restore-all"
                    disabled=is_empty
                    on:click=restore_all
                >
                    {t("trash.restoreAll")}
                </button>
            </header>
            <Show
                when=move || !is_empty()
                fallback=move || {
                    view! {
                        <div class="trash-empty">
                            <h3>{t("trash.emptyTitle")}</h3>
                            <p>{t("trash.emptyDescription")}</p>
                        </div>
                    }
                }
            >
                <ul class="trash-list">
                    <For
                        each=move || state.with(|s| s.trashed_apps.clone())
                        key=|app| app.id.clone()
                        let:app
                    >
                        {
                            let app_id = app.id.clone();
                            view! {
                                <li class="trash-item">
                                    <span class="trash-item-glyph" aria-hidden="true">
                                        {apps::placeholder_glyph(&app.name)}
                                    </span>
                                    <span class="trash-item-name">{app.name.clone()}</span>
                                    <button
                                        type="button"
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::RestoreTrashedApp {
                                                    app_id: app_id.clone(),
                                                });
                                        }
                                    >
                                        {t("trash.restore")}
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </div>
    }
}
