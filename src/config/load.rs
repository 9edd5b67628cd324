use std::{env, path::PathBuf};

use super::schema::Settings;

const ENV_PREFIX: &str = "CADENZA";
const ENV_SEPARATOR: &str = "__";

impl Settings {
    /// Read `config.toml` (if any) and overlay `CADENZA__SECTION__KEY`
    /// variables on top. Missing keys keep their struct defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the catalog would refuse later anyway.
    pub fn validate(&self) -> Result<(), String> {
        let days = self.library.recent_days;
        if !days.is_finite() || days <= 0.0 {
            return Err(format!("library.recent_days must be > 0 (got {days})"));
        }
        if self.output.track_fields.is_empty() {
            return Err("output.track_fields must name at least one field".to_string());
        }
        Ok(())
    }
}

/// `CADENZA_CONFIG_PATH` if set, otherwise [`default_config_path`].
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os("CADENZA_CONFIG_PATH")
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `cadenza/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config` when
/// that is unset. `None` when neither variable is available.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("cadenza").join("config.toml"))
}
