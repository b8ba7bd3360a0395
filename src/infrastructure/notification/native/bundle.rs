//! Main-bundle identity override
//!
//! A bare executable has no bundle identifier and the notification center
//! silently drops what it posts. Replacing `-[NSBundle bundleIdentifier]` lets the
//! process post as an installed application (e.g. `com.apple.Terminal`).

use std::sync::OnceLock;

use crate::application::ports::NotificationError;

use super::foundation::leaked_ns_string;
use super::runtime::{class, replace_instance_method, send, Id, Imp, Sel};

struct Override {
    /// Retained NSString for the fake identifier
    identifier: usize,
    /// Implementation that was replaced
    original: Imp,
    /// The identifier the override was installed with
    requested: String,
}

static OVERRIDE: OnceLock<Result<Override, NotificationError>> = OnceLock::new();

extern "C" fn bundle_identifier(this: Id, cmd: Sel) -> Id {
    let Some(Ok(state)) = OVERRIDE.get() else {
        return std::ptr::null_mut();
    };

    let is_main = class("NSBundle")
        // SAFETY: +mainBundle takes no arguments and returns an NSBundle.
        .and_then(|cls| unsafe { send::<_, Id>(cls, "mainBundle", ()) })
        .map(|main| main == this)
        .unwrap_or(false);
    if is_main {
        return state.identifier as Id;
    }

    // SAFETY: `original` is the replaced -bundleIdentifier with signature (id, SEL) -> id.
    unsafe {
        let original: extern "C" fn(Id, Sel) -> Id = std::mem::transmute(state.original);
        original(this, cmd)
    }
}

/// Make the main bundle report `identifier`.
///
/// Installed at most once per process; later calls keep the first identifier and
/// return it.
pub fn install(identifier: &str) -> Result<&'static str, NotificationError> {
    OVERRIDE
        .get_or_init(|| replace(identifier))
        .as_ref()
        .map(|state| state.requested.as_str())
        .map_err(Clone::clone)
}

fn replace(identifier: &str) -> Result<Override, NotificationError> {
    let ns_identifier = leaked_ns_string(identifier)?;
    let cls = class("NSBundle")?;
    // SAFETY: `bundle_identifier` has the (id, SEL) -> id signature of the method it replaces.
    let original = unsafe {
        let imp = std::mem::transmute::<extern "C" fn(Id, Sel) -> Id, Imp>(bundle_identifier);
        replace_instance_method(cls, "bundleIdentifier", imp)?
    };
    Ok(Override {
        identifier: ns_identifier as usize,
        original,
        requested: identifier.to_string(),
    })
}

/// Identifier every test in this process installs; the first install wins.
#[cfg(test)]
pub(super) const TEST_BUNDLE_ID: &str = "com.apple.Terminal";
