//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Objective-C runtime, notify-rust, notify-send
//! and the config file.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
#[cfg(target_os = "macos")]
pub use notification::NativeNotifier;
pub use notification::{
    create_notifier, DeliverySettings, NotifyRustNotifier, NotifySendNotifier,
};
