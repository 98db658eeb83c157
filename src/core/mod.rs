//! Core page model: animation sampling, playback state and static content

pub mod animation;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod playback;

pub use animation::{AnimationPhase, OneShot, Tween};
pub use playback::PlaybackState;
