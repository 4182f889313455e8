//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::ButtonConfig;
use crate::domain::error::ConfigError;
use crate::domain::style::{Color, HapticsMode};

use super::args::{
    is_valid_config_key, parse_duration, ConfigAction, MAX_SIZE, VALID_CONFIG_KEYS,
};
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
    check_key(key)?;

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
    check_key(key)?;

    let config = store.load().await?;
    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key);
        presenter.key_value(key, value.as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in its canonical form
fn apply_value(config: &mut ButtonConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "inner_color" => config.inner_color = Some(parse_color(key, value)?.to_string()),
        "ring_color" => config.ring_color = Some(parse_color(key, value)?.to_string()),
        "ring_width" => config.ring_width = Some(parse_length(key, value)?),
        "ring_spacing" => config.ring_spacing = Some(parse_length(key, value)?),
        "transition_duration" => {
            let secs = parse_duration(value).map_err(|e| invalid(key, format!("Value {}", e)))?;
            config.transition_duration = Some(secs);
        }
        "haptics" => {
            let mode = value
                .parse::<HapticsMode>()
                .map_err(|e| invalid(key, e.to_string()))?;
            config.haptics = Some(mode.to_string());
        }
        "size" => config.size = Some(parse_size(key, value)?),
        _ => return check_key(key),
    }
    Ok(())
}

fn config_value(config: &ButtonConfig, key: &str) -> Option<String> {
    match key {
        "inner_color" => config.inner_color.clone(),
        "ring_color" => config.ring_color.clone(),
        "ring_width" => config.ring_width.map(|v| v.to_string()),
        "ring_spacing" => config.ring_spacing.map(|v| v.to_string()),
        "transition_duration" => config.transition_duration.map(|v| v.to_string()),
        "haptics" => config.haptics.clone(),
        "size" => config.size.map(|v| v.to_string()),
        _ => None,
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|e| invalid(key, e.to_string()))
}

/// Non-negative finite number
fn parse_length(key: &str, value: &str) -> Result<f32, ConfigError> {
    match value.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(invalid(key, "Value must be a non-negative number".to_string())),
    }
}

fn parse_size(key: &str, value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(v) if (1..=MAX_SIZE).contains(&v) => Ok(v),
        _ => Err(invalid(
            key,
            format!("Value must be a whole number from 1 to {}", MAX_SIZE),
        )),
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message,
    }
}
