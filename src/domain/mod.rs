//! Domain layer - Core values
//!
//! Contains the notification value objects, delivery settings and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod delivery;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use delivery::{BackendId, Linger};
pub use error::*;
pub use notification::{Notification, Sound};
