//! Foundation helpers: autorelease pools, owned objects, strings and the run loop

use std::ffi::CString;

use crate::application::ports::NotificationError;
use crate::domain::delivery::Linger;
use crate::domain::notification::MACOS_DEFAULT_SOUND;

use super::runtime::{class, send, send_id, Class, Id};

#[link(name = "Foundation", kind = "framework")]
extern "C" {
    static NSUserNotificationDefaultSoundName: Id;
}

/// Scoped `NSAutoreleasePool`; drained on drop, including on error paths.
pub struct AutoreleasePool {
    pool: Id,
}

impl AutoreleasePool {
    pub fn new() -> Result<Self, NotificationError> {
        let cls = class("NSAutoreleasePool")?;
        // SAFETY: +[NSAutoreleasePool new] takes no arguments and returns an owned pool.
        let pool = unsafe { send_id(cls, "new", ())? };
        Ok(Self { pool })
    }
}

impl Drop for AutoreleasePool {
    fn drop(&mut self) {
        // SAFETY: `pool` came from +new and is drained exactly once.
        let _: Result<(), _> = unsafe { send(self.pool, "drain", ()) };
    }
}

/// An object the caller owns (+1 retain count); released on drop.
pub struct Owned {
    object: Id,
}

impl Owned {
    /// `[[ClassName alloc] init]`
    pub fn alloc_init(class_name: &str) -> Result<Self, NotificationError> {
        Self::alloc_init_class(class(class_name)?)
    }

    /// `[[cls alloc] init]` for an already resolved class
    pub fn alloc_init_class(cls: Class) -> Result<Self, NotificationError> {
        // SAFETY: +alloc returns an uninitialized instance; -init consumes it and
        // returns the initialized object (or nil, which is reported).
        unsafe {
            let raw = send_id(cls, "alloc", ())?;
            let object = send_id(raw, "init", ())?;
            Ok(Self { object })
        }
    }

    pub fn as_id(&self) -> Id {
        self.object
    }
}

impl Drop for Owned {
    fn drop(&mut self) {
        // SAFETY: we hold the +1 reference from alloc/init.
        let _: Result<(), _> = unsafe { send(self.object, "release", ()) };
    }
}

/// Autoreleased `NSString` from a Rust string.
///
/// Must be called with an autorelease pool in place.
pub fn ns_string(value: &str) -> Result<Id, NotificationError> {
    let c_value = CString::new(value).map_err(|_| NotificationError::InvalidString)?;
    let cls = class("NSString")?;
    // SAFETY: +stringWithUTF8String: copies the NUL-terminated buffer before returning.
    unsafe { send_id(cls, "stringWithUTF8String:", (c_value.as_ptr(),)) }
}

/// Retained `NSString` that lives for the rest of the process.
pub fn leaked_ns_string(value: &str) -> Result<Id, NotificationError> {
    let c_value = CString::new(value).map_err(|_| NotificationError::InvalidString)?;
    let cls = class("NSString")?;
    // SAFETY: alloc/initWithUTF8String: yields a +1 string we never release.
    unsafe {
        let raw = send_id(cls, "alloc", ())?;
        send_id(raw, "initWithUTF8String:", (c_value.as_ptr(),))
    }
}

/// The system's `NSUserNotificationDefaultSoundName` constant.
pub fn default_sound_name() -> Result<Id, NotificationError> {
    // SAFETY: the symbol is an immutable NSString exported by Foundation.
    let name = unsafe { NSUserNotificationDefaultSoundName };
    if name.is_null() {
        return Err(NotificationError::NilObject(MACOS_DEFAULT_SOUND.to_string()));
    }
    Ok(name)
}

/// Run the current thread's run loop until `linger` has elapsed.
///
/// Lets the notification center process the delivery before the process exits.
pub fn pump_run_loop(linger: Linger) -> Result<(), NotificationError> {
    if linger.is_zero() {
        return Ok(());
    }
    let run_loop_cls = class("NSRunLoop")?;
    let date_cls = class("NSDate")?;
    // SAFETY: +currentRunLoop and +dateWithTimeIntervalSinceNow: return autoreleased
    // objects; -runUntilDate: takes an NSDate and returns void.
    unsafe {
        let run_loop = send_id(run_loop_cls, "currentRunLoop", ())?;
        let deadline = send_id(
            date_cls,
            "dateWithTimeIntervalSinceNow:",
            (linger.as_secs_f64(),),
        )?;
        send::<_, ()>(run_loop, "runUntilDate:", (deadline,))
    }
}
