//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::application::PostInput;
use crate::domain::config::{AppConfig, MacosConfig};
use crate::domain::delivery::BackendId;
use crate::infrastructure::DeliverySettings;

/// darwin-notify - post a native desktop notification
#[derive(Parser, Debug)]
#[command(name = "darwin-notify")]
#[command(version)]
#[command(about = "Post a native desktop notification through the OS notification center")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// The main title of the notification (required)
    #[arg(short = 't', long, value_name = "TITLE", required = true)]
    pub title: Option<String>,

    /// Optional subtitle displayed under the title
    #[arg(short = 's', long, value_name = "SUBTITLE")]
    pub subtitle: Option<String>,

    /// Informative message/body of the notification
    #[arg(short = 'm', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Play the default notification sound
    #[arg(long, overrides_with = "no_sound")]
    pub sound: bool,

    /// Do not play a sound (default)
    #[arg(long, overrides_with = "sound")]
    pub no_sound: bool,

    /// Play a named system sound, e.g. Glass (implies --sound)
    #[arg(long, value_name = "NAME", conflicts_with = "no_sound")]
    pub sound_name: Option<String>,

    /// Delivery backend
    #[arg(short = 'b', long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Keep the run loop alive this long after delivery (e.g., 250ms, 2s).
    /// 0ms skips the pump and with it the forced banner
    #[arg(short = 'l', long, value_name = "TIME")]
    pub linger: Option<String>,

    /// Post as this application bundle id (native backend)
    #[arg(long, value_name = "BUNDLE_ID")]
    pub bundle_id: Option<String>,

    /// Do not force the banner to show while the process is frontmost.
    /// The banner is never forced with a zero --linger
    #[arg(long)]
    pub no_force_present: bool,

    /// Report the backend and settings used
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Explicit sound choice, if any flag was given
    pub fn sound_flag(&self) -> Option<bool> {
        if self.sound || self.sound_name.is_some() {
            Some(true)
        } else if self.no_sound {
            Some(false)
        } else {
            None
        }
    }

    /// The config layer contributed by command-line flags
    pub fn to_config(&self) -> AppConfig {
        let macos = if self.bundle_id.is_some() || self.no_force_present {
            Some(MacosConfig {
                bundle_id: self.bundle_id.clone(),
                force_present: self.no_force_present.then_some(false),
            })
        } else {
            None
        };

        AppConfig {
            backend: self.backend.map(|b| BackendId::from(b).to_string()),
            sound: self.sound_flag(),
            sound_name: self.sound_name.clone(),
            linger: self.linger.clone(),
            macos,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Native,
    NotifyRust,
    NotifySend,
}

impl From<BackendArg> for BackendId {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Native => BackendId::Native,
            BackendArg::NotifyRust => BackendId::NotifyRust,
            BackendArg::NotifySend => BackendId::NotifySend,
        }
    }
}

/// Fully resolved options for posting a notification
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub input: PostInput,
    pub backend: BackendId,
    pub settings: DeliverySettings,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "backend",
    "sound",
    "sound_name",
    "linger",
    "macos.bundle_id",
    "macos.force_present",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
