//! Notification infrastructure module
//!
//! Provides native macOS delivery through the Objective-C runtime, with
//! notify-rust and notify-send as fallbacks on other platforms.

#[cfg(target_os = "macos")]
mod native;
mod notify_rust;
mod notify_send;

#[cfg(target_os = "macos")]
pub use native::{NativeNotifier, NativeOptions};
pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::delivery::{BackendId, Linger};

/// Application name reported to freedesktop notification servers
pub const APP_NAME: &str = "darwin-notify";

/// Settings that shape how a backend delivers
#[derive(Debug, Clone)]
pub struct DeliverySettings {
    pub linger: Linger,
    pub force_present: bool,
    pub bundle_id: Option<String>,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            linger: Linger::default(),
            force_present: true,
            bundle_id: None,
        }
    }
}

/// Create the notifier for the requested backend
pub fn create_notifier(
    backend: BackendId,
    settings: DeliverySettings,
) -> Result<Box<dyn Notifier>, NotificationError> {
    if !backend.is_supported() {
        return Err(NotificationError::Unsupported(backend));
    }

    match backend {
        #[cfg(target_os = "macos")]
        BackendId::Native => Ok(Box::new(NativeNotifier::with_options(NativeOptions {
            linger: settings.linger,
            force_present: settings.force_present,
            bundle_id: settings.bundle_id,
        }))),
        #[cfg(not(target_os = "macos"))]
        BackendId::Native => {
            let _ = settings;
            Err(NotificationError::Unsupported(backend))
        }
        BackendId::NotifyRust => Ok(Box::new(NotifyRustNotifier::new())),
        BackendId::NotifySend => Ok(Box::new(NotifySendNotifier::new())),
    }
}
