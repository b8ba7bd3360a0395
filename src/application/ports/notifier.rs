//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::delivery::BackendId;
use crate::domain::notification::Notification;

/// Notification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Objective-C class not found: {0} (is the framework available on this system?)")]
    ClassNotFound(String),

    #[error("Objective-C message '{0}' returned nil")]
    NilObject(String),

    #[error("Notification text contains an interior NUL byte")]
    InvalidString,

    #[error("Failed to synthesize delegate class: {0}")]
    SubclassFailed(String),

    #[error("Backend '{0}' is not supported on this platform")]
    Unsupported(BackendId),

    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Which backend this notifier delivers through
    fn backend(&self) -> BackendId;

    /// Deliver exactly one notification.
    ///
    /// # Arguments
    /// * `notification` - The validated notification to show
    ///
    /// # Returns
    /// Ok(()) once the OS has accepted the notification, error otherwise
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    fn backend(&self) -> BackendId {
        self.as_ref().backend()
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.as_ref().notify(notification).await
    }
}
