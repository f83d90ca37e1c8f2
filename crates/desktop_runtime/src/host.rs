//! Host-side runtime helpers for executing reducer effects against injected host services.
//!
//! Effect execution stays out of the reducer; every browser dependency sits behind the
//! [`HostServices`] bundle assembled by the entry crate.

mod boot;
mod effects;

use std::rc::Rc;

use platform_host::{BackgroundImageStore, HostServices, PrefsStore, SoundSink, ThemeSink};

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured background-image store.
    pub fn background_image_store(&self) -> Rc<dyn BackgroundImageStore> {
        self.services.background_image.clone()
    }

    /// Returns the configured theme sink.
    pub fn theme_sink(&self) -> Rc<dyn ThemeSink> {
        self.services.theme.clone()
    }

    /// Returns the configured sound sink.
    pub fn sound_sink(&self) -> Rc<dyn SoundSink> {
        self.services.sound.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs boot hydration: initial theme, persisted locale, stored background image.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime);
    }

    /// Runs effects that complete synchronously against a sink.
    ///
    /// Returns `false` for effects that need the async store path.
    pub fn apply_sink_effect(&self, effect: &RuntimeEffect) -> bool {
        match effect {
            RuntimeEffect::ApplyTheme(theme) => self.theme_sink().apply_theme(theme.as_str()),
            RuntimeEffect::PlaySound(cue) => self.sound_sink().play(cue),
            RuntimeEffect::RevokeObjectUrl(url) => self.background_image_store().release_url(url),
            _ => return false,
        }
        true
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        if self.apply_sink_effect(&effect) {
            return;
        }
        match effect {
            RuntimeEffect::PersistLocale => effects::persist_locale(self.clone(), runtime),
            RuntimeEffect::SaveBackgroundImage { bytes, mime_type } => {
                effects::save_background_image(self.clone(), runtime.dispatch, bytes, mime_type)
            }
            RuntimeEffect::LoadBackgroundImage => {
                effects::load_background_image(self.clone(), runtime.dispatch)
            }
            RuntimeEffect::DeleteBackgroundImage => {
                effects::delete_background_image(self.clone(), runtime.dispatch)
            }
            RuntimeEffect::ApplyTheme(_)
            | RuntimeEffect::PlaySound(_)
            | RuntimeEffect::RevokeObjectUrl(_) => {}
        }
    }
}
