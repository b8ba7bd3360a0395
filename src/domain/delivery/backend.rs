//! Delivery backend identifier

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// All available backends
pub const ALL_BACKENDS: &[BackendId] = &[
    BackendId::Native,
    BackendId::NotifyRust,
    BackendId::NotifySend,
];

/// Which mechanism delivers the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendId {
    /// Objective-C runtime calls into NSUserNotificationCenter (macOS)
    Native,
    /// The notify-rust crate
    NotifyRust,
    /// The freedesktop `notify-send` tool
    NotifySend,
}

impl BackendId {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
        }
    }

    /// Whether this backend can run on the current platform
    pub const fn is_supported(&self) -> bool {
        match self {
            Self::Native => cfg!(target_os = "macos"),
            Self::NotifyRust => true,
            Self::NotifySend => cfg!(all(unix, not(target_os = "macos"))),
        }
    }
}

impl Default for BackendId {
    #[cfg(target_os = "macos")]
    fn default() -> Self {
        Self::Native
    }

    #[cfg(not(target_os = "macos"))]
    fn default() -> Self {
        Self::NotifyRust
    }
}

impl FromStr for BackendId {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "objc" => Ok(Self::Native),
            "notify-rust" | "notify_rust" => Ok(Self::NotifyRust),
            "notify-send" | "notify_send" => Ok(Self::NotifySend),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
