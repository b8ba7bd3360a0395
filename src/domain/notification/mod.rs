//! Notification domain module

mod content;
mod sound;

pub use content::Notification;
pub use sound::{Sound, FREEDESKTOP_DEFAULT_SOUND, MACOS_DEFAULT_SOUND};
