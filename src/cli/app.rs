//! Main app runner for posting a notification

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{PostInput, PostNotificationUseCase};
use crate::domain::config::AppConfig;
use crate::domain::delivery::{validate_bundle_id, BackendId, Linger};
use crate::domain::notification::Sound;
use crate::infrastructure::{create_notifier, DeliverySettings, XdgConfigStore};

use super::args::{Cli, NotifyOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured backend
pub const BACKEND_ENV: &str = "DARWIN_NOTIFY_BACKEND";

/// Post one notification
pub async fn run_notify(options: NotifyOptions, presenter: &Presenter) -> ExitCode {
    let backend = options.backend;

    if backend != BackendId::Native && options.settings.bundle_id.is_some() {
        presenter.warn(&format!(
            "--bundle-id only applies to the native backend; ignored for {}",
            backend
        ));
    }

    let notifier = match create_notifier(backend, options.settings.clone()) {
        Ok(notifier) => notifier,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.detail(&format!(
        "Delivering via {} (linger {})",
        backend, options.settings.linger
    ));

    let use_case = PostNotificationUseCase::new(notifier);

    match use_case.execute(options.input).await {
        Ok(output) => {
            presenter.detail(&format!(
                "Notification \"{}\" delivered via {}",
                output.notification.title(),
                output.backend
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            if e.is_usage_error() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}

/// Turn parsed flags and the merged config into delivery options.
///
/// Fails with a user-facing message when a configured value is invalid.
pub fn resolve_options(cli: &Cli, config: &AppConfig) -> Result<NotifyOptions, String> {
    let backend = match config.backend.as_deref() {
        Some(s) => s.parse::<BackendId>().map_err(|e| e.to_string())?,
        None => BackendId::default(),
    };

    let linger = match config.linger.as_deref() {
        Some(s) => s
            .parse::<Linger>()
            .map_err(|e| format!("Invalid linger: {}", e))?,
        None => Linger::default(),
    };

    // A blank name from the command line is an error, not a fallback to the default sound.
    if let Some(name) = cli.sound_name.as_deref() {
        Sound::named(name).map_err(|e| e.to_string())?;
    }

    let bundle_id = match cli.bundle_id.as_deref().or(config.bundle_id()) {
        Some(id) => Some(validate_bundle_id(id).map_err(|e| e.to_string())?.to_string()),
        None => None,
    };

    let sound = config.sound_or_default();
    let input = PostInput {
        title: cli.title.clone().unwrap_or_default(),
        subtitle: cli.subtitle.clone(),
        text: cli.text.clone(),
        sound,
        sound_name: if sound {
            config.sound_name().map(str::to_string)
        } else {
            None
        },
    };

    Ok(NotifyOptions {
        input,
        backend,
        settings: DeliverySettings {
            linger,
            force_present: config.force_present_or_default(),
            bundle_id,
        },
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    load_merged_config_from(&store, cli_config).await
}

/// Merge: defaults < file < env < cli
pub async fn load_merged_config_from<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        backend: env::var(BACKEND_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("darwin-notify").chain(args.iter().copied()))
    }

    #[test]
    fn resolve_defaults() {
        let cli = cli(&["-t", "Hello"]);
        let options = resolve_options(&cli, &AppConfig::defaults()).unwrap();

        assert_eq!(options.input.title, "Hello");
        assert!(!options.input.sound);
        assert!(options.input.sound_name.is_none());
        assert_eq!(options.backend, BackendId::default());
        assert_eq!(options.settings.linger, Linger::default());
        assert!(options.settings.force_present);
        assert!(options.settings.bundle_id.is_none());
    }

    #[test]
    fn resolve_cli_overrides_file() {
        let cli = cli(&["-t", "Hello", "--linger", "2s", "--sound"]);
        let file = AppConfig {
            linger: Some("1s".to_string()),
            sound: Some(false),
            sound_name: Some("Glass".to_string()),
            ..Default::default()
        };
        let config = AppConfig::defaults().merge(file).merge(cli.to_config());

        let options = resolve_options(&cli, &config).unwrap();

        assert_eq!(options.settings.linger.as_millis(), 2000);
        assert!(options.input.sound);
        assert_eq!(options.input.sound_name, Some("Glass".to_string()));
    }

    #[test]
    fn resolve_no_sound_drops_configured_name() {
        let cli = cli(&["-t", "Hello", "--no-sound"]);
        let file = AppConfig {
            sound: Some(true),
            sound_name: Some("Glass".to_string()),
            ..Default::default()
        };
        let config = AppConfig::defaults().merge(file).merge(cli.to_config());

        let options = resolve_options(&cli, &config).unwrap();

        assert!(!options.input.sound);
        assert!(options.input.sound_name.is_none());
    }

    #[test]
    fn resolve_invalid_linger() {
        let cli = cli(&["-t", "Hello", "--linger", "soon"]);
        let config = AppConfig::defaults().merge(cli.to_config());

        let err = resolve_options(&cli, &config).unwrap_err();
        assert!(err.contains("Invalid linger"));
    }

    #[test]
    fn resolve_invalid_backend_from_config() {
        let cli = cli(&["-t", "Hello"]);
        let config = AppConfig {
            backend: Some("growl".to_string()),
            ..Default::default()
        };

        let err = resolve_options(&cli, &config).unwrap_err();
        assert!(err.contains("growl"));
    }

    #[test]
    fn resolve_blank_cli_sound_name() {
        let cli = cli(&["-t", "Hello", "--sound-name", "   "]);
        let config = AppConfig::defaults().merge(cli.to_config());

        let err = resolve_options(&cli, &config).unwrap_err();
        assert!(err.contains("Sound name must not be empty"));
    }

    #[test]
    fn resolve_invalid_cli_bundle_id() {
        let cli = cli(&["-t", "Hello", "--bundle-id", "Terminal"]);
        let config = AppConfig::defaults().merge(cli.to_config());

        let err = resolve_options(&cli, &config).unwrap_err();
        assert!(err.contains("Invalid bundle id 'Terminal'"));
    }

    #[test]
    fn resolve_valid_cli_bundle_id() {
        let cli = cli(&["-t", "Hello", "--bundle-id", "com.apple.Terminal"]);
        let config = AppConfig::defaults().merge(cli.to_config());

        let options = resolve_options(&cli, &config).unwrap();
        assert_eq!(
            options.settings.bundle_id,
            Some("com.apple.Terminal".to_string())
        );
    }

    #[tokio::test]
    async fn merged_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&AppConfig {
                linger: Some("750ms".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let merged = load_merged_config_from(&store, AppConfig::empty()).await;

        assert_eq!(merged.linger_or_default().as_millis(), 750);
        assert!(merged.force_present_or_default());
    }

    #[tokio::test]
    async fn merged_config_survives_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "linger = [").unwrap();
        let store = XdgConfigStore::with_path(path);

        let merged = load_merged_config_from(&store, AppConfig::empty()).await;

        assert_eq!(merged.linger, Some(Linger::default().to_string()));
    }
}
