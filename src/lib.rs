//! darwin-notify - native desktop notifications from the command line
//!
//! On macOS the notification is posted through `NSUserNotificationCenter` by
//! calling the Objective-C runtime C ABI directly (`objc_getClass`,
//! `sel_registerName`, `objc_msgSend`, `objc_allocateClassPair`). Other
//! platforms fall back to notify-rust or `notify-send`.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification value objects, delivery settings, config and errors
//! - **Application**: The post-notification use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Objective-C runtime, notify-rust, notify-send, XDG config)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
