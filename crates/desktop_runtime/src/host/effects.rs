use leptos::{logging, spawn_local, Callable, Callback, SignalGetUntracked};

use crate::{
    background_image::BackgroundImageError,
    host::DesktopHostContext,
    persistence,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

const REMOVE_FAILED_KEY: &str = "backgroundImage.removeFailed";

pub(super) fn persist_locale(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let locale = runtime.state.get_untracked().locale;
    spawn_local(async move {
        if let Err(err) = persistence::persist_locale(&host, locale).await {
            logging::warn!("persist locale failed: {err}");
        }
    });
}

pub(super) fn save_background_image(
    host: DesktopHostContext,
    sink: Callback<DesktopAction>,
    bytes: Vec<u8>,
    mime_type: String,
) {
    spawn_local(async move {
        let action = match persistence::save_background_image(&host, bytes, mime_type).await {
            Ok(url) => DesktopAction::BackgroundImageSaved { url },
            Err(err) => {
                let err = BackgroundImageError::Storage(err);
                logging::warn!("{err}");
                DesktopAction::BackgroundImageFailed {
                    message: err.message_key().to_string(),
                }
            }
        };
        sink.call(action);
    });
}

pub(super) fn load_background_image(host: DesktopHostContext, sink: Callback<DesktopAction>) {
    spawn_local(async move {
        let url = match persistence::load_background_image(&host).await {
            Ok(url) => url,
            Err(err) => {
                logging::warn!("load background image failed: {err}");
                None
            }
        };
        sink.call(DesktopAction::BackgroundImageLoaded { url });
    });
}

pub(super) fn delete_background_image(host: DesktopHostContext, sink: Callback<DesktopAction>) {
    spawn_local(async move {
        let action = match persistence::delete_background_image(&host).await {
            Ok(()) => DesktopAction::BackgroundImageCleared,
            Err(err) => {
                logging::warn!("delete background image failed: {err}");
                DesktopAction::BackgroundImageFailed {
                    message: REMOVE_FAILED_KEY.to_string(),
                }
            }
        };
        sink.call(action);
    });
}
