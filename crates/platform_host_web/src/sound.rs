//! UI sound cues played through detached `HtmlAudioElement`s.

use platform_host::SoundSink;

/// Maps a cue name to its bundled asset path.
pub fn cue_asset_path(cue: &str) -> Option<&'static str> {
    match cue {
        "trash" => Some("/sounds/trash.mp3"),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser sound sink. Unknown cues and autoplay rejections are ignored.
pub struct WebSoundSink;

impl SoundSink for WebSoundSink {
    fn play(&self, cue: &str) {
        let Some(path) = cue_asset_path(cue) else {
            return;
        };

        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(path) {
                let _ = audio.play();
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = path;
    }
}
