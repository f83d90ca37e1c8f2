use leptos::*;
use platform_host_web::{first_selected_file, read_file_bytes};

use super::use_desktop_runtime;
use crate::{
    background_image::{validate_upload, ALLOWED_IMAGE_TYPES},
    i18n::translate,
    model::{Locale, Orientation, Theme},
    reducer::DesktopAction,
};

fn theme_label_key(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "appearance.themeLight",
        Theme::Dark => "appearance.themeDark",
    }
}

fn orientation_label_key(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Bottom => "appearance.navigationBottom",
        Orientation::Top => "appearance.navigationTop",
        Orientation::Left => "appearance.navigationLeft",
        Orientation::Right => "appearance.navigationRight",
    }
}

fn locale_label_key(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "languageAndRegion.english",
        Locale::Pt => "languageAndRegion.portuguese",
    }
}

/// Background error text: translation keys resolve, anything else is shown as-is.
fn background_error_text(locale: Locale, error: &str) -> String {
    translate(locale, error)
}

#[component]
/// Settings window body: general info, language, and appearance controls.
pub(super) fn SettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let t = move |key: &'static str| move || state.with(|s| translate(s.locale, key));
    let file_input = create_node_ref::<html::Input>();

    let on_theme_change = move |ev: web_sys::Event| {
        if let Some(theme) = Theme::from_token(&event_target_value(&ev)) {
            runtime.dispatch_action(DesktopAction::SetTheme { theme });
        }
    };
    let on_orientation_change = move |ev: web_sys::Event| {
        if let Some(orientation) = Orientation::from_token(&event_target_value(&ev)) {
            runtime.dispatch_action(DesktopAction::SetOrientation { orientation });
        }
    };
    let on_locale_change = move |ev: web_sys::Event| {
        if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
            runtime.dispatch_action(DesktopAction::SetLocale { locale });
        }
    };

    let open_file_picker = move |_: web_sys::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };
    let on_file_change = move |ev: web_sys::Event| {
        let Some((file, selected)) = first_selected_file(&ev) else {
            return;
        };
        if let Err(err) = validate_upload(&selected.mime_type, selected.size) {
            logging::warn!("background image `{}` rejected: {err}", selected.name);
            runtime.dispatch_action(DesktopAction::BackgroundImageRejected {
                message: err.message_key().to_string(),
            });
            return;
        }
        spawn_local(async move {
            match read_file_bytes(&file).await {
                Ok(bytes) => runtime.dispatch_action(DesktopAction::SelectBackgroundImage {
                    mime_type: selected.mime_type,
                    bytes,
                }),
                Err(err) => {
                    logging::warn!("background image read failed: {err}");
                    runtime.dispatch_action(DesktopAction::BackgroundImageRejected {
                        message: "backgroundImage.saveFailed".to_string(),
                    });
                }
            }
        });
    };
    let remove_background = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::RemoveBackgroundImage);
    };

    let has_background = move || state.with(|s| s.background.url.is_some());
    let background_loading = move || state.with(|s| s.background.loading);
    let background_error = move || {
        state.with(|s| {
            s.background
                .error
                .as_deref()
                .map(|error| background_error_text(s.locale, error))
        })
    };

    view! {
        <div class="settings-panel">
            <section class="settings-section" aria-labelledby="settings-general">
                <h2 id="settings-general">{t("settings.general")}</h2>
                <p class="settings-description">{t("settings.generalDescription")}</p>
                <dl class="settings-row">
                    <dt>{t("settings.version")}</dt>
                    <dd>{env!("CARGO_PKG_VERSION")}</dd>
                </dl>
            </section>

            <section class="settings-section" aria-labelledby="settings-language">
                <h2 id="settings-language">{t("settings.languageAndRegion")}</h2>
                <label class="settings-row">
                    <span>{t("languageAndRegion.preferredLanguage")}</span>
                    <small>{t("languageAndRegion.selectLanguage")}</small>
                    <select
                        prop:value=move || state.with(|s| s.locale.code())
                        on:change=on_locale_change
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|locale| {
                                view! {
                                    <option
                                        value=locale.code()
                                        selected=move || state.with(|s| s.locale == locale)
                                    >
                                        {t(locale_label_key(locale))}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </section>

            <section class="settings-section" aria-labelledby="settings-appearance">
                <h2 id="settings-appearance">{t("settings.appearance")}</h2>

                <label class="settings-row">
                    <span>{t("appearance.themeMode")}</span>
                    <small>{t("appearance.themeModeDescription")}</small>
                    <select
                        prop:value=move || state.with(|s| s.theme.as_str())
                        on:change=on_theme_change
                    >
                        {Theme::ALL
                            .into_iter()
                            .map(|theme| {
                                view! {
                                    <option
                                        value=theme.as_str()
                                        selected=move || state.with(|s| s.theme == theme)
                                    >
                                        {t(theme_label_key(theme))}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="settings-row">
                    <span>{t("appearance.navigationOrientation")}</span>
                    <small>{t("appearance.navigationOrientationDescription")}</small>
                    <select
                        prop:value=move || state.with(|s| s.orientation.as_str())
                        on:change=on_orientation_change
                    >
                        {Orientation::ALL
                            .into_iter()
                            .map(|orientation| {
                                view! {
                                    <option
                                        value=orientation.as_str()
                                        selected=move || state.with(|s| s.orientation == orientation)
                                    >
                                        {t(orientation_label_key(orientation))}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="settings-row settings-background">
                    <span>{t("appearance.backgroundImage")}</span>
                    <small>{t("appearance.backgroundImageDescription")}</small>
                    <div
                        class="background-preview"
                        style=move || {
                            state.with(|s| match &s.background.url {
                                Some(url) => format!("background-image:url('{url}');"),
                                None => String::new(),
                            })
                        }
                    >
                        <Show when=move || !has_background()>
                            <span>{t("appearance.backgroundNone")}</span>
                        </Show>
                    </div>
                    <input
                        type="file"
                        class="visually-hidden"
                        accept=ALLOWED_IMAGE_TYPES.join(",")
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <div class="settings-actions">
                        <button
                            type="button"
                            disabled=background_loading
                            on:click=open_file_picker
                        >
                            {move || {
                                if background_loading() {
                                    state.with(|s| translate(s.locale, "appearance.backgroundLoading"))
                                } else {
                                    state.with(|s| translate(s.locale, "appearance.backgroundChange"))
                                }
                            }}
                        </button>
                        <Show when=has_background>
                            <button
                                type="button"
                                disabled=background_loading
                                on:click=remove_background
                            >
                                {t("appearance.backgroundRemove")}
                            </button>
                        </Show>
                    </div>
                    {move || {
                        background_error()
                            .map(|message| view! { <p class="settings-error" role="alert">{message}</p> })
                    }}
                </div>
            </section>
        </div>
    }
}
