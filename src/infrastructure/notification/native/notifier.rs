//! Native macOS notifier built directly on the Objective-C runtime

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::delivery::{BackendId, Linger};
use crate::domain::notification::{Notification, Sound};

use super::foundation::{default_sound_name, ns_string, pump_run_loop, AutoreleasePool, Owned};
use super::runtime::{class, send, send_id, Id};
use super::{bundle, delegate};

/// Delivery options for the native notifier
#[derive(Debug, Clone)]
pub struct NativeOptions {
    /// How long to pump the run loop after delivery
    pub linger: Linger,
    /// Install a delegate that forces the banner to be shown.
    /// Has no effect with a zero linger.
    pub force_present: bool,
    /// Post as this bundle identifier
    pub bundle_id: Option<String>,
}

impl Default for NativeOptions {
    fn default() -> Self {
        Self {
            linger: Linger::default(),
            force_present: true,
            bundle_id: None,
        }
    }
}

/// Notifier posting through `NSUserNotificationCenter`.
///
/// Runs on the calling thread. Call it from the main thread so the run-loop
/// pump services the main run loop.
pub struct NativeNotifier {
    options: NativeOptions,
}

impl NativeNotifier {
    pub fn new() -> Self {
        Self::with_options(NativeOptions::default())
    }

    pub fn with_options(options: NativeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NativeOptions {
        &self.options
    }

    /// Deliver synchronously.
    pub fn deliver(&self, notification: &Notification) -> Result<(), NotificationError> {
        let _pool = AutoreleasePool::new()?;

        if let Some(bundle_id) = self.options.bundle_id.as_deref() {
            bundle::install(bundle_id)?;
        }

        let user_notification = Owned::alloc_init("NSUserNotification")?;
        populate(user_notification.as_id(), notification)?;

        let center_cls = class("NSUserNotificationCenter")?;
        // SAFETY: +defaultUserNotificationCenter returns the shared (unowned) center.
        let center = unsafe { send_id(center_cls, "defaultUserNotificationCenter", ())? };

        // SAFETY: -delegate returns the current delegate or nil.
        let previous: Id = unsafe { send(center, "delegate", ())? };

        let presenter = if self.presents() {
            let cls = delegate::delegate_class()?;
            let instance = Owned::alloc_init_class(cls)?;
            // SAFETY: -setDelegate: takes an object conforming to the delegate protocol.
            unsafe { send::<_, ()>(center, "setDelegate:", (instance.as_id(),))? };
            Some(instance)
        } else {
            None
        };

        // SAFETY: -deliverNotification: takes an NSUserNotification and returns void.
        let delivered =
            unsafe { send::<_, ()>(center, "deliverNotification:", (user_notification.as_id(),)) };
        let pumped = delivered.and_then(|()| pump_run_loop(self.options.linger));

        let restored = match presenter {
            // The center holds its delegate weakly; put the previous one back
            // before ours is released.
            // SAFETY: -setDelegate: accepts any delegate or nil.
            Some(_) => unsafe { send::<_, ()>(center, "setDelegate:", (previous,)) },
            None => Ok(()),
        };

        pumped.and(restored)
    }

    /// Whether the presenting delegate is installed for this delivery.
    ///
    /// The delegate only acts while the run loop is pumped, so a zero linger skips it.
    fn presents(&self) -> bool {
        self.options.force_present && !self.options.linger.is_zero()
    }
}

impl Default for NativeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy the notification fields onto an `NSUserNotification`.
fn populate(target: Id, notification: &Notification) -> Result<(), NotificationError> {
    set_string(target, "setTitle:", notification.title())?;
    if let Some(subtitle) = notification.subtitle() {
        set_string(target, "setSubtitle:", subtitle)?;
    }
    if let Some(text) = notification.text() {
        set_string(target, "setInformativeText:", text)?;
    }

    let sound = match notification.sound() {
        Sound::None => None,
        Sound::Default => Some(default_sound_name()?),
        Sound::Named(name) => Some(ns_string(name)?),
    };
    if let Some(sound) = sound {
        // SAFETY: -setSoundName: takes an NSString.
        unsafe { send::<_, ()>(target, "setSoundName:", (sound,))? };
    }
    Ok(())
}

fn set_string(target: Id, setter: &str, value: &str) -> Result<(), NotificationError> {
    let value = ns_string(value)?;
    // SAFETY: all string setters on NSUserNotification take one NSString and return void.
    unsafe { send::<_, ()>(target, setter, (value,)) }
}

#[async_trait]
impl Notifier for NativeNotifier {
    fn backend(&self) -> BackendId {
        BackendId::Native
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        // Stays on the current thread: the run-loop pump must run where the
        // notification center was touched.
        self.deliver(notification)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::super::runtime::{Bool, YES};
    use super::*;

    // The notification center and its delegate are process-wide.
    static CENTER: Mutex<()> = Mutex::new(());

    #[test]
    fn default_options() {
        let notifier = NativeNotifier::default();
        assert!(notifier.options().force_present);
        assert!(notifier.options().bundle_id.is_none());
        assert_eq!(notifier.options().linger, Linger::default());
        assert_eq!(notifier.backend(), BackendId::Native);
    }

    fn options(linger_ms: u64, force_present: bool) -> NativeOptions {
        NativeOptions {
            linger: Linger::from_millis(linger_ms),
            force_present,
            // Unbundled test binaries get no notification center without one.
            bundle_id: Some(bundle::TEST_BUNDLE_ID.to_string()),
        }
    }

    #[test]
    fn delivers_title_only() {
        let _center = CENTER.lock().unwrap_or_else(|e| e.into_inner());
        let notifier = NativeNotifier::with_options(options(10, true));
        let notification = Notification::new("x").unwrap();

        assert_eq!(notifier.deliver(&notification), Ok(()));
    }

    #[test]
    fn delivers_all_fields_without_delegate() {
        let _center = CENTER.lock().unwrap_or_else(|e| e.into_inner());
        let notifier = NativeNotifier::with_options(options(10, false));
        let notification = Notification::new("Build finished")
            .unwrap()
            .with_subtitle(Some("darwin-notify".to_string()))
            .with_text(Some("All tests passed".to_string()))
            .with_sound(Sound::Default);

        assert_eq!(notifier.deliver(&notification), Ok(()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn notify_delivers_through_port() {
        let _center = CENTER.lock().unwrap_or_else(|e| e.into_inner());
        let notifier = NativeNotifier::with_options(options(5, true));
        let notification = Notification::new("x")
            .unwrap()
            .with_sound(Sound::named("Glass").unwrap());

        assert_eq!(notifier.notify(&notification).await, Ok(()));
    }

    #[test]
    fn delegate_restored_after_delivery() {
        let _center = CENTER.lock().unwrap_or_else(|e| e.into_inner());
        let notifier = NativeNotifier::with_options(options(5, true));
        let notification = Notification::new("x").unwrap();

        notifier.deliver(&notification).unwrap();

        let _pool = AutoreleasePool::new().unwrap();
        // SAFETY: +defaultUserNotificationCenter and -delegate return objects or nil.
        let current: Id = unsafe {
            let center = send_id(
                class("NSUserNotificationCenter").unwrap(),
                "defaultUserNotificationCenter",
                (),
            )
            .unwrap();
            send(center, "delegate", ()).unwrap()
        };
        let ours = delegate::delegate_class().unwrap();
        // SAFETY: -isKindOfClass: takes a Class and returns BOOL; nil answers NO.
        let is_ours: Bool = unsafe { send(current, "isKindOfClass:", (ours,)).unwrap() };
        assert_ne!(is_ours, YES);
    }

    #[test]
    fn zero_linger_skips_delegate() {
        assert!(!NativeNotifier::with_options(options(0, true)).presents());
        assert!(NativeNotifier::with_options(options(10, true)).presents());
        assert!(!NativeNotifier::with_options(options(10, false)).presents());
    }

    #[test]
    fn populate_sets_fields() {
        let _pool = AutoreleasePool::new().unwrap();
        let target = Owned::alloc_init("NSUserNotification").unwrap();
        let notification = Notification::new("Title")
            .unwrap()
            .with_subtitle(Some("Sub".to_string()))
            .with_text(Some("Body".to_string()))
            .with_sound(Sound::Default);

        populate(target.as_id(), &notification).unwrap();

        // SAFETY: -title/-soundName return NSString, -UTF8String returns a C string.
        unsafe {
            let title: Id = send(target.as_id(), "title", ()).unwrap();
            let utf8: *const std::ffi::c_char = send(title, "UTF8String", ()).unwrap();
            assert_eq!(std::ffi::CStr::from_ptr(utf8).to_str().unwrap(), "Title");
            let sound: Id = send(target.as_id(), "soundName", ()).unwrap();
            assert!(!sound.is_null());
        }
    }

    #[test]
    fn populate_skips_absent_fields() {
        let _pool = AutoreleasePool::new().unwrap();
        let target = Owned::alloc_init("NSUserNotification").unwrap();
        let notification = Notification::new("Only title").unwrap();

        populate(target.as_id(), &notification).unwrap();

        // SAFETY: -subtitle and -soundName return NSString or nil.
        unsafe {
            let subtitle: Id = send(target.as_id(), "subtitle", ()).unwrap();
            let sound: Id = send(target.as_id(), "soundName", ()).unwrap();
            assert!(subtitle.is_null());
            assert!(sound.is_null());
        }
    }
}
