//! notify-send notification adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::delivery::BackendId;
use crate::domain::notification::Notification;

use super::APP_NAME;

/// notify-send notification adapter
pub struct NotifySendNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifySendNotifier {
    /// Create a new notify-send notifier
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Arguments passed to notify-send
    fn args(&self, notification: &Notification) -> Vec<String> {
        let mut args = vec!["--app-name".to_string(), self.app_name.clone()];

        if let Some(name) = notification.sound().freedesktop_name() {
            args.push(format!("--hint=string:sound-name:{}", name));
        }

        // Separates options from positionals so a title starting with '-' is not parsed as a flag
        args.push("--".to_string());
        args.push(notification.title().to_string());

        let body = notification.flattened_body();
        if !body.is_empty() {
            args.push(body);
        }

        args
    }
}

impl Default for NotifySendNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    fn backend(&self) -> BackendId {
        BackendId::NotifySend
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .args(self.args(notification))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}
