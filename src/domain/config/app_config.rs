//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::delivery::{BackendId, Linger};

/// macOS-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacosConfig {
    pub bundle_id: Option<String>,
    pub force_present: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub sound: Option<bool>,
    pub sound_name: Option<String>,
    pub linger: Option<String>,
    pub macos: Option<MacosConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some(BackendId::default().to_string()),
            sound: Some(false),
            sound_name: None,
            linger: Some(Linger::default_linger().to_string()),
            macos: Some(MacosConfig {
                bundle_id: None,
                force_present: Some(true),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            sound: other.sound.or(self.sound),
            sound_name: other.sound_name.or(self.sound_name),
            linger: other.linger.or(self.linger),
            macos: Self::merge_macos_config(self.macos, other.macos),
        }
    }

    /// Merge macOS config sections
    fn merge_macos_config(
        base: Option<MacosConfig>,
        other: Option<MacosConfig>,
    ) -> Option<MacosConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(MacosConfig {
                bundle_id: o.bundle_id.or(b.bundle_id),
                force_present: o.force_present.or(b.force_present),
            }),
        }
    }

    /// Get backend as parsed BackendId, or the platform default if not set/invalid
    pub fn backend_or_default(&self) -> BackendId {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get linger as parsed Linger, or default if not set/invalid
    pub fn linger_or_default(&self) -> Linger {
        self.linger
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get sound setting, or false if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(false)
    }

    /// Get the configured sound name, ignoring blank values
    pub fn sound_name(&self) -> Option<&str> {
        self.sound_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Get the bundle id to post as, if any
    pub fn bundle_id(&self) -> Option<&str> {
        self.macos
            .as_ref()
            .and_then(|m| m.bundle_id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    /// Get force-present setting, or true if not set
    pub fn force_present_or_default(&self) -> bool {
        self.macos
            .as_ref()
            .and_then(|m| m.force_present)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.backend, Some(BackendId::default().to_string()));
        assert_eq!(config.sound, Some(false));
        assert!(config.sound_name.is_none());
        assert_eq!(config.linger, Some("50ms".to_string()));
        let macos = config.macos.as_ref().unwrap();
        assert!(macos.bundle_id.is_none());
        assert_eq!(macos.force_present, Some(true));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.backend.is_none());
        assert!(config.sound.is_none());
        assert!(config.sound_name.is_none());
        assert!(config.linger.is_none());
        assert!(config.macos.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            backend: Some("native".to_string()),
            linger: Some("1s".to_string()),
            sound: Some(true),
            ..Default::default()
        };

        let other = AppConfig {
            backend: Some("notify-send".to_string()),
            linger: None,
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.backend, Some("notify-send".to_string()));
        assert_eq!(merged.linger, Some("1s".to_string()));
        assert_eq!(merged.sound, Some(true));
    }

    #[test]
    fn merge_preserves_base_when_other_is_empty() {
        let base = AppConfig {
            sound_name: Some("Glass".to_string()),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.sound_name(), Some("Glass"));
    }

    #[test]
    fn merge_macos_config() {
        let base = AppConfig {
            macos: Some(MacosConfig {
                bundle_id: Some("com.apple.Terminal".to_string()),
                force_present: Some(true),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            macos: Some(MacosConfig {
                force_present: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.bundle_id(), Some("com.apple.Terminal"));
        assert!(!merged.force_present_or_default());
    }

    #[test]
    fn backend_or_default_parses() {
        let config = AppConfig {
            backend: Some("notify-send".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), BackendId::NotifySend);
    }

    #[test]
    fn backend_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            backend: Some("growl".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend_or_default(), BackendId::default());
    }

    #[test]
    fn linger_or_default() {
        let config = AppConfig {
            linger: Some("2s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.linger_or_default().as_millis(), 2000);

        let invalid = AppConfig {
            linger: Some("forever".to_string()),
            ..Default::default()
        };
        assert_eq!(invalid.linger_or_default(), Linger::default());
    }

    #[test]
    fn empty_config_defaults() {
        let config = AppConfig::empty();
        assert!(!config.sound_or_default());
        assert!(config.force_present_or_default());
        assert!(config.bundle_id().is_none());
        assert!(config.sound_name().is_none());
    }

    #[test]
    fn blank_strings_are_ignored() {
        let config = AppConfig {
            sound_name: Some("  ".to_string()),
            macos: Some(MacosConfig {
                bundle_id: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.sound_name().is_none());
        assert!(config.bundle_id().is_none());
    }
}
