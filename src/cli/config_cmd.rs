//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, MacosConfig};
use crate::domain::delivery::{validate_bundle_id, BackendId, Linger};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;
    match read_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "backend" => {
            let backend = value
                .parse::<BackendId>()
                .map_err(|e| invalid(e.to_string()))?;
            config.backend = Some(backend.to_string());
        }
        "sound" => config.sound = Some(parse_bool(value).map_err(|_| invalid(bool_hint()))?),
        "sound_name" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
            config.sound_name = Some(value.trim().to_string());
        }
        "linger" => {
            let linger = value
                .parse::<Linger>()
                .map_err(|e| invalid(e.to_string()))?;
            config.linger = Some(linger.to_string());
        }
        "macos.bundle_id" => {
            let bundle_id = validate_bundle_id(value).map_err(|e| invalid(e.to_string()))?;
            macos_section(config).bundle_id = Some(bundle_id.to_string());
        }
        "macos.force_present" => {
            let force = parse_bool(value).map_err(|_| invalid(bool_hint()))?;
            macos_section(config).force_present = Some(force);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Display value for `key`, if set
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    let macos = config.macos.as_ref();
    match key {
        "backend" => config.backend.clone(),
        "sound" => config.sound.map(|b| b.to_string()),
        "sound_name" => config.sound_name.clone(),
        "linger" => config.linger.clone(),
        "macos.bundle_id" => macos.and_then(|m| m.bundle_id.clone()),
        "macos.force_present" => macos.and_then(|m| m.force_present).map(|b| b.to_string()),
        _ => None,
    }
}

fn macos_section(config: &mut AppConfig) -> &mut MacosConfig {
    config.macos.get_or_insert_with(MacosConfig::default)
}

fn bool_hint() -> String {
    "Value must be 'true' or 'false'".to_string()
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
