//! Application layer - Use cases and port interfaces
//!
//! Contains the notification use case and the trait definitions
//! for external system interactions.

pub mod ports;
pub mod post;

// Re-export use cases
pub use post::{PostError, PostInput, PostNotificationUseCase, PostOutput};
