//! UI sound-cue sink.

use std::{cell::RefCell, rc::Rc};

/// Plays short named UI cues such as `"trash"`.
pub trait SoundSink {
    /// Starts playback of the named cue. Failures are swallowed by the adapter.
    fn play(&self, cue: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent sound sink.
pub struct NoopSoundSink;

impl SoundSink for NoopSoundSink {
    fn play(&self, _cue: &str) {}
}

#[derive(Debug, Clone, Default)]
/// Sound sink recording requested cues.
pub struct RecordingSoundSink {
    played: Rc<RefCell<Vec<String>>>,
}

impl RecordingSoundSink {
    /// Returns every cue requested so far.
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl SoundSink for RecordingSoundSink {
    fn play(&self, cue: &str) {
        self.played.borrow_mut().push(cue.to_string());
    }
}
