//! Reducer helpers for theme, navigator orientation, locale, and background-image transitions.

use crate::{
    background_image::{is_object_url, validate_upload},
    model::DesktopState,
    reducer::{DesktopAction, ReducerError, RuntimeEffect},
};

pub(super) fn reduce_preferences_action(
    state: &mut DesktopState,
    action: &DesktopAction,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<bool, ReducerError> {
    match action {
        DesktopAction::SetTheme { theme } => {
            state.theme = *theme;
            effects.push(RuntimeEffect::ApplyTheme(*theme));
        }
        DesktopAction::SetOrientation { orientation } => {
            state.orientation = *orientation;
        }
        DesktopAction::SetLocale { locale } => {
            state.locale = *locale;
            effects.push(RuntimeEffect::PersistLocale);
        }
        DesktopAction::HydrateLocale { locale } => {
            state.locale = *locale;
        }
        DesktopAction::SelectBackgroundImage { mime_type, bytes } => {
            match validate_upload(mime_type, bytes.len() as u64) {
                Ok(()) => {
                    state.background.loading = true;
                    state.background.error = None;
                    effects.push(RuntimeEffect::SaveBackgroundImage {
                        bytes: bytes.clone(),
                        mime_type: mime_type.clone(),
                    });
                }
                Err(err) => {
                    state.background.error = Some(err.message_key().to_string());
                }
            }
        }
        DesktopAction::LoadBackgroundImage => {
            state.background.loading = true;
            effects.push(RuntimeEffect::LoadBackgroundImage);
        }
        DesktopAction::BackgroundImageLoaded { url } => {
            replace_background_url(state, url.clone(), effects);
            state.background.loading = false;
        }
        DesktopAction::BackgroundImageSaved { url } => {
            replace_background_url(state, Some(url.clone()), effects);
            state.background.loading = false;
            state.background.error = None;
        }
        DesktopAction::BackgroundImageFailed { message } => {
            state.background.loading = false;
            state.background.error = Some(message.clone());
        }
        DesktopAction::BackgroundImageRejected { message } => {
            state.background.error = Some(message.clone());
        }
        DesktopAction::RemoveBackgroundImage => {
            state.background.error = None;
            effects.push(RuntimeEffect::DeleteBackgroundImage);
        }
        DesktopAction::BackgroundImageCleared => {
            replace_background_url(state, None, effects);
            state.background.loading = false;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

fn replace_background_url(
    state: &mut DesktopState,
    next: Option<String>,
    effects: &mut Vec<RuntimeEffect>,
) {
    let previous = std::mem::replace(&mut state.background.url, next);
    if let Some(previous) = previous {
        if is_object_url(&previous) && state.background.url.as_deref() != Some(previous.as_str()) {
            effects.push(RuntimeEffect::RevokeObjectUrl(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        background_image::MAX_IMAGE_BYTES,
        interaction::InteractionState,
        model::{Locale, Orientation, Theme},
        reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
        DesktopState,
    };

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, &mut InteractionState::default(), action).expect("reduce")
    }

    #[test]
    fn theme_and_locale_emit_their_effects() {
        let mut state = DesktopState::default();
        assert_eq!(
            reduce(&mut state, DesktopAction::SetTheme { theme: Theme::Dark }),
            vec![RuntimeEffect::ApplyTheme(Theme::Dark)]
        );
        assert_eq!(
            reduce(&mut state, DesktopAction::SetLocale { locale: Locale::Pt }),
            vec![RuntimeEffect::PersistLocale]
        );
        assert!(reduce(
            &mut state,
            DesktopAction::SetOrientation {
                orientation: Orientation::Left
            }
        )
        .is_empty());
        assert!(reduce(&mut state, DesktopAction::HydrateLocale { locale: Locale::En }).is_empty());

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.orientation, Orientation::Left);
        assert_eq!(state.locale, Locale::En);
    }

    #[test]
    fn invalid_upload_only_sets_error() {
        let mut state = DesktopState::default();
        state.background.url = Some("blob:current".to_string());
        let mut expected = state.clone();
        expected.background.error = Some("backgroundImage.invalidType".to_string());

        let effects = reduce(
            &mut state,
            DesktopAction::SelectBackgroundImage {
                mime_type: "image/gif".to_string(),
                bytes: vec![0; 16],
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, expected);

        let effects = reduce(
            &mut state,
            DesktopAction::SelectBackgroundImage {
                mime_type: "image/png".to_string(),
                bytes: vec![0; MAX_IMAGE_BYTES as usize + 1],
            },
        );
        assert!(effects.is_empty());
        assert_eq!(
            state.background.error.as_deref(),
            Some("backgroundImage.tooLarge")
        );
        assert_eq!(state.background.url.as_deref(), Some("blob:current"));
    }

    #[test]
    fn valid_upload_saves_then_replaces_and_revokes_old_object_url() {
        let mut state = DesktopState::default();
        state.background.url = Some("blob:old".to_string());

        let effects = reduce(
            &mut state,
            DesktopAction::SelectBackgroundImage {
                mime_type: "image/webp".to_string(),
                bytes: vec![1, 2, 3],
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::SaveBackgroundImage {
                bytes: vec![1, 2, 3],
                mime_type: "image/webp".to_string(),
            }]
        );
        assert!(state.background.loading);

        let effects = reduce(
            &mut state,
            DesktopAction::BackgroundImageSaved {
                url: "blob:new".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::RevokeObjectUrl("blob:old".to_string())]
        );
        assert_eq!(state.background.url.as_deref(), Some("blob:new"));
        assert!(!state.background.loading);
    }

    #[test]
    fn remove_then_cleared_drops_url() {
        let mut state = DesktopState::default();
        state.background.url = Some("blob:current".to_string());

        assert_eq!(
            reduce(&mut state, DesktopAction::RemoveBackgroundImage),
            vec![RuntimeEffect::DeleteBackgroundImage]
        );
        assert_eq!(
            reduce(&mut state, DesktopAction::BackgroundImageCleared),
            vec![RuntimeEffect::RevokeObjectUrl("blob:current".to_string())]
        );
        assert_eq!(state.background.url, None);
    }

    #[test]
    fn storage_failure_keeps_current_image() {
        let mut state = DesktopState::default();
        state.background.url = Some("memory://background-image/1".to_string());
        reduce(&mut state, DesktopAction::LoadBackgroundImage);
        assert!(state.background.loading);

        let effects = reduce(
            &mut state,
            DesktopAction::BackgroundImageFailed {
                message: "backgroundImage.saveFailed".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(!state.background.loading);
        assert_eq!(
            state.background.url.as_deref(),
            Some("memory://background-image/1")
        );
    }

    #[test]
    fn rejected_pick_keeps_pending_save_loading() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::SelectBackgroundImage {
                mime_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            },
        );
        assert!(state.background.loading);

        let effects = reduce(
            &mut state,
            DesktopAction::BackgroundImageRejected {
                message: "backgroundImage.tooLarge".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(state.background.loading);
        assert_eq!(
            state.background.error.as_deref(),
            Some("backgroundImage.tooLarge")
        );
    }
}
