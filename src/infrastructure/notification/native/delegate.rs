//! Runtime-synthesized notification center delegate
//!
//! `NSUserNotificationCenter` suppresses banners while the posting process is
//! considered frontmost. A delegate answering YES to
//! `userNotificationCenter:shouldPresentNotification:` forces presentation.

use std::sync::OnceLock;

use crate::application::ports::NotificationError;

use super::runtime::{
    class, define_subclass, lookup_class, Bool, Class, Id, Imp, Sel, BOOL_ENCODING, YES,
};

/// Name of the synthesized class
pub const DELEGATE_CLASS_NAME: &str = "DarwinNotifyPresentingDelegate";

const SHOULD_PRESENT: &str = "userNotificationCenter:shouldPresentNotification:";

/// Class pointer, stored as an address so it can live in a static.
static DELEGATE_CLASS: OnceLock<Result<usize, NotificationError>> = OnceLock::new();

extern "C" fn should_present(_this: Id, _cmd: Sel, _center: Id, _notification: Id) -> Bool {
    YES
}

/// The delegate class, created on first use.
pub fn delegate_class() -> Result<Class, NotificationError> {
    DELEGATE_CLASS
        .get_or_init(|| register().map(|cls| cls as usize))
        .clone()
        .map(|addr| addr as Class)
}

fn register() -> Result<Class, NotificationError> {
    if let Some(existing) = lookup_class(DELEGATE_CLASS_NAME) {
        return Ok(existing);
    }

    let superclass = class("NSObject")?;
    let types = format!("{}@:@@", BOOL_ENCODING);
    // SAFETY: transmuting between `extern "C"` fn pointer types; the runtime calls
    // it back with (id, SEL, id, id) as described by `types`.
    let imp: Imp = unsafe {
        std::mem::transmute::<extern "C" fn(Id, Sel, Id, Id) -> Bool, Imp>(should_present)
    };
    // SAFETY: `imp` matches `types`.
    unsafe {
        define_subclass(
            superclass,
            DELEGATE_CLASS_NAME,
            &[(SHOULD_PRESENT, imp, types.as_str())],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notification::native::runtime::{send, sel};

    #[test]
    fn class_is_registered_once() {
        let first = delegate_class().unwrap();
        let second = delegate_class().unwrap();
        assert_eq!(first, second);
        assert_eq!(lookup_class(DELEGATE_CLASS_NAME), Some(first));
    }

    #[test]
    fn instances_respond_to_should_present() {
        let cls = delegate_class().unwrap();
        let selector = sel(SHOULD_PRESENT).unwrap();
        // SAFETY: +instancesRespondToSelector: takes a SEL and returns BOOL.
        let responds: Bool =
            unsafe { send(cls, "instancesRespondToSelector:", (selector,)).unwrap() };
        assert_eq!(responds, YES);
    }
}
