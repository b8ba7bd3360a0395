//! Native macOS notifications through raw Objective-C runtime calls
//!
//! No Cocoa binding crate is involved: classes are looked up by name, selectors
//! are registered at runtime and every message is dispatched through a single
//! typed `objc_msgSend` helper. A presenting delegate class is synthesized at
//! runtime and the run loop is pumped after delivery.

mod bundle;
mod delegate;
mod foundation;
mod notifier;
mod runtime;

pub use notifier::{NativeNotifier, NativeOptions};
