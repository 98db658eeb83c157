//! Play/pause state of the mocked video preview.
//!
//! The flag is purely cosmetic: it picks the button icon and its label and
//! never drives a media element.

/// Playback state shown by the preview button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    /// The other state
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Accessible label describing what a click will do
    pub fn action_label(&self) -> &'static str {
        match self {
            PlaybackState::Paused => "Play video",
            PlaybackState::Playing => "Pause video",
        }
    }
}
