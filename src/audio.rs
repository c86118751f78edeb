//! Audio side channel.
//!
//! The session only tells the sink what should be audible; whether playback
//! actually happens (autoplay policy, missing files) is the sink's business and
//! never reaches game state.

pub trait AudioSink {
    /// Fire the dice-roll effect once.
    fn play_effect(&mut self);
    /// Start or pause the looping background track.
    fn set_music_playing(&mut self, playing: bool);
}

/// Sink for hosts without sound (tests, the scriptable JS handle).
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_effect(&mut self) {}
    fn set_music_playing(&mut self, _playing: bool) {}
}
