//! Raw bindings to the Objective-C runtime and a typed message dispatch helper
//!
//! Only the handful of `libobjc` entry points the notifier needs are declared.
//! Every message goes through [`send`], which casts `objc_msgSend` to the exact
//! C signature implied by the argument tuple and the return type.

use std::ffi::{c_char, c_void, CString};
use std::mem;

use crate::application::ports::NotificationError;

/// Object pointer (`id`)
pub type Id = *mut c_void;
/// Class pointer (`Class`)
pub type Class = *mut c_void;
/// Selector (`SEL`)
pub type Sel = *const c_void;
/// Method handle (`Method`)
pub type Method = *mut c_void;
/// Untyped method implementation (`IMP`)
pub type Imp = unsafe extern "C" fn();

/// Objective-C `BOOL`
#[cfg(target_arch = "aarch64")]
pub type Bool = bool;
#[cfg(target_arch = "aarch64")]
pub const YES: Bool = true;
/// Type encoding of `BOOL` for `class_addMethod`
#[cfg(target_arch = "aarch64")]
pub const BOOL_ENCODING: &str = "B";

/// Objective-C `BOOL`
#[cfg(not(target_arch = "aarch64"))]
pub type Bool = i8;
#[cfg(not(target_arch = "aarch64"))]
pub const YES: Bool = 1;
/// Type encoding of `BOOL` for `class_addMethod`
#[cfg(not(target_arch = "aarch64"))]
pub const BOOL_ENCODING: &str = "c";

#[link(name = "objc")]
extern "C" {
    fn objc_getClass(name: *const c_char) -> Class;
    fn sel_registerName(name: *const c_char) -> Sel;

    /// Variadic in C; must only be called through a transmuted, fully typed pointer.
    fn objc_msgSend();

    fn objc_allocateClassPair(superclass: Class, name: *const c_char, extra_bytes: usize)
        -> Class;
    fn objc_registerClassPair(cls: Class);
    fn objc_disposeClassPair(cls: Class);
    fn class_addMethod(cls: Class, name: Sel, imp: Imp, types: *const c_char) -> Bool;
    fn class_getInstanceMethod(cls: Class, name: Sel) -> Method;
    fn method_setImplementation(method: Method, imp: Imp) -> Option<Imp>;
}

fn c_string(value: &str) -> Result<CString, NotificationError> {
    CString::new(value).map_err(|_| NotificationError::InvalidString)
}

/// Look up a class by name.
pub fn class(name: &str) -> Result<Class, NotificationError> {
    let c_name = c_string(name)?;
    // SAFETY: `c_name` is a valid NUL-terminated string for the duration of the call.
    let cls = unsafe { objc_getClass(c_name.as_ptr()) };
    if cls.is_null() {
        return Err(NotificationError::ClassNotFound(name.to_string()));
    }
    Ok(cls)
}

/// Look up a class by name, returning `None` when it is not registered.
pub fn lookup_class(name: &str) -> Option<Class> {
    class(name).ok()
}

/// Register (or fetch the interned) selector for a method name.
///
/// Selector names are compile-time literals, so an interior NUL is a programming error;
/// it is still reported rather than panicking.
pub fn sel(name: &str) -> Result<Sel, NotificationError> {
    let c_name = c_string(name)?;
    // SAFETY: `c_name` is a valid NUL-terminated string; the runtime copies it.
    Ok(unsafe { sel_registerName(c_name.as_ptr()) })
}

/// Argument tuples that can be passed to [`send`].
///
/// Implemented for tuples of up to three arguments. Each element must be a
/// C-compatible type matching the method's declared parameter.
pub trait MessageArguments: Sized {
    /// # Safety
    /// `receiver` must be a valid object or class and the method named by `sel`
    /// must have exactly the signature `(Self...) -> R`.
    unsafe fn invoke<R>(receiver: Id, sel: Sel, args: Self) -> R;
}

macro_rules! message_args {
    ($($a:ident : $t:ident),*) => {
        impl<$($t),*> MessageArguments for ($($t,)*) {
            #[inline]
            unsafe fn invoke<R>(receiver: Id, sel: Sel, ($($a,)*): Self) -> R {
                let imp: unsafe extern "C" fn(Id, Sel $(, $t)*) -> R =
                    mem::transmute(objc_msgSend as Imp);
                imp(receiver, sel $(, $a)*)
            }
        }
    };
}

message_args!();
message_args!(a: A);
message_args!(a: A, b: B);
message_args!(a: A, b: B, c: C);

/// Send a message by selector name.
///
/// # Safety
/// `receiver` must be a valid object or class (or nil) and the method must accept
/// `args` and return `R` under the platform C ABI. Floating-point and struct
/// returns are not supported on x86_64 (they need `objc_msgSend_fpret`/`_stret`).
pub unsafe fn send<A: MessageArguments, R>(
    receiver: Id,
    selector: &str,
    args: A,
) -> Result<R, NotificationError> {
    let sel = sel(selector)?;
    Ok(A::invoke(receiver, sel, args))
}

/// Send a message that must produce an object; nil is reported as an error.
///
/// # Safety
/// Same contract as [`send`], with an object (`id`) return type.
pub unsafe fn send_id<A: MessageArguments>(
    receiver: Id,
    selector: &str,
    args: A,
) -> Result<Id, NotificationError> {
    let result: Id = send(receiver, selector, args)?;
    if result.is_null() {
        return Err(NotificationError::NilObject(selector.to_string()));
    }
    Ok(result)
}

/// Create a new subclass of `superclass` named `name` with the given methods.
///
/// Each method is `(selector, implementation, type encoding)`. The class is
/// registered with the runtime before returning.
///
/// # Safety
/// Every implementation must match its type encoding.
pub unsafe fn define_subclass(
    superclass: Class,
    name: &str,
    methods: &[(&str, Imp, &str)],
) -> Result<Class, NotificationError> {
    let c_name = c_string(name)?;
    let cls = objc_allocateClassPair(superclass, c_name.as_ptr(), 0);
    if cls.is_null() {
        return Err(NotificationError::SubclassFailed(name.to_string()));
    }

    for &(selector, imp, types) in methods {
        let added = match (sel(selector), c_string(types)) {
            (Ok(sel), Ok(types)) => class_addMethod(cls, sel, imp, types.as_ptr()) == YES,
            _ => false,
        };
        if !added {
            objc_disposeClassPair(cls);
            return Err(NotificationError::SubclassFailed(format!(
                "{} (could not add {})",
                name, selector
            )));
        }
    }

    objc_registerClassPair(cls);
    Ok(cls)
}

/// Replace the implementation of an instance method, returning the previous one.
///
/// # Safety
/// `imp` must have the same signature as the method it replaces.
pub unsafe fn replace_instance_method(
    cls: Class,
    selector: &str,
    imp: Imp,
) -> Result<Imp, NotificationError> {
    let method = class_getInstanceMethod(cls, sel(selector)?);
    if method.is_null() {
        return Err(NotificationError::NilObject(selector.to_string()));
    }
    method_setImplementation(method, imp)
        .ok_or_else(|| NotificationError::NilObject(selector.to_string()))
}
