//! Notification sound value object

use std::fmt;

use crate::domain::error::ContentError;

/// Freedesktop sound theme name used where the OS has no "default" constant
pub const FREEDESKTOP_DEFAULT_SOUND: &str = "message-new-instant";

/// Name of the macOS default notification sound
pub const MACOS_DEFAULT_SOUND: &str = "NSUserNotificationDefaultSoundName";

/// Sound played along with the notification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sound {
    /// Silent
    #[default]
    None,
    /// The platform's default notification sound
    Default,
    /// A named system sound (e.g. "Glass", "Ping")
    Named(String),
}

impl Sound {
    /// Build a sound from the `--sound` toggle and an optional sound name.
    ///
    /// A name always wins; otherwise the toggle picks between silent and default.
    pub fn from_parts(enabled: bool, name: Option<&str>) -> Result<Self, ContentError> {
        match name {
            Some(name) => Self::named(name),
            None if enabled => Ok(Self::Default),
            None => Ok(Self::None),
        }
    }

    /// Create a named sound, rejecting blank names
    pub fn named(name: &str) -> Result<Self, ContentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContentError::EmptySoundName);
        }
        Ok(Self::Named(name.to_string()))
    }

    /// Whether any sound is requested
    pub const fn is_audible(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Sound name for freedesktop backends
    pub fn freedesktop_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Default => Some(FREEDESKTOP_DEFAULT_SOUND),
            Self::Named(name) => Some(name),
        }
    }
}

impl Sound {
    /// Sound name for macOS backends that take a string
    pub fn macos_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Default => Some(MACOS_DEFAULT_SOUND),
            Self::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Default => write!(f, "default"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}
