//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::delivery::BackendId;
use crate::domain::notification::Notification;

use super::APP_NAME;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Build the notify-rust notification for the current platform
    fn build(&self, notification: &Notification) -> notify_rust::Notification {
        let mut native = notify_rust::Notification::new();
        native.appname(&self.app_name).summary(notification.title());

        #[cfg(target_os = "macos")]
        {
            if let Some(subtitle) = notification.subtitle() {
                native.subtitle(subtitle);
            }
            if let Some(text) = notification.text() {
                native.body(text);
            }
            if let Some(sound) = notification.sound().macos_name() {
                native.sound_name(sound);
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            let body = notification.flattened_body();
            if !body.is_empty() {
                native.body(&body);
            }
            #[cfg(unix)]
            if let Some(name) = notification.sound().freedesktop_name() {
                native.hint(notify_rust::Hint::SoundName(name.to_string()));
            }
        }

        native
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    fn backend(&self) -> BackendId {
        BackendId::NotifyRust
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let native = self.build(notification);

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            native
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
