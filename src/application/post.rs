//! Post notification use case

use thiserror::Error;

use crate::domain::delivery::BackendId;
use crate::domain::error::ContentError;
use crate::domain::notification::{Notification, Sound};

use super::ports::{NotificationError, Notifier};

/// Errors from the post use case
#[derive(Debug, Error)]
pub enum PostError {
    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] NotificationError),
}

impl PostError {
    /// Whether the error is caused by bad user input rather than the OS
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Content(_))
    }
}

/// Input parameters for the post use case
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    /// Notification title (required, non-blank)
    pub title: String,
    /// Optional subtitle shown under the title
    pub subtitle: Option<String>,
    /// Optional informative text
    pub text: Option<String>,
    /// Play a sound
    pub sound: bool,
    /// Named sound; implies `sound`
    pub sound_name: Option<String>,
}

impl PostInput {
    /// Validate into a domain notification
    pub fn into_notification(self) -> Result<Notification, ContentError> {
        let sound = Sound::from_parts(self.sound, self.sound_name.as_deref())?;
        Ok(Notification::new(self.title)?
            .with_subtitle(self.subtitle)
            .with_text(self.text)
            .with_sound(sound))
    }
}

/// Output from the post use case
#[derive(Debug, Clone)]
pub struct PostOutput {
    /// Backend that delivered the notification
    pub backend: BackendId,
    /// The notification that was delivered
    pub notification: Notification,
}

/// Delivers one notification through a notifier
pub struct PostNotificationUseCase<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> PostNotificationUseCase<N> {
    /// Create a new use case instance
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Validate the input and deliver it. No retries.
    pub async fn execute(&self, input: PostInput) -> Result<PostOutput, PostError> {
        let notification = input.into_notification()?;

        self.notifier.notify(&notification).await?;

        Ok(PostOutput {
            backend: self.notifier.backend(),
            notification,
        })
    }
}
