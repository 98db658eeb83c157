pub mod icon;
pub mod mount_animation;
pub mod pages;
pub mod playback_toggle;

pub use icon::{Icon, IconKind};
pub use mount_animation::{AnimationError, MountAnimation, use_mount_animation};
pub use pages::{LandingPage, NotFoundPage};
pub use playback_toggle::PlaybackToggle;
