use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Display names for the two players.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub x_name: String,
    pub o_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            x_name: "Player X".to_string(),
            o_name: "Player O".to_string(),
        }
    }
}

impl PlayersConfig {
    /// Get the configured display name for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_name,
            Player::O => &self.o_name,
        }
    }
}

/// Terminal UI timing and splash screen settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds; drives splash animation frames.
    pub tick_rate_ms: u64,
    /// Whether to show the launch splash at startup.
    pub splash: bool,
    /// How long the launch splash plays, in milliseconds.
    pub splash_duration_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 50,
            splash: true,
            splash_duration_ms: 2000,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: PlayersConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.x_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.x_name must not be empty".into(),
            ));
        }
        if self.players.o_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.o_name must not be empty".into(),
            ));
        }
        if self.players.x_name == self.players.o_name {
            return Err(ConfigError::Validation(
                "players.x_name and players.o_name must differ".into(),
            ));
        }
        // Long names overflow the game over popup
        if self.players.x_name.chars().count() > 20 {
            return Err(ConfigError::Validation(
                "players.x_name must be at most 20 characters".into(),
            ));
        }
        if self.players.o_name.chars().count() > 20 {
            return Err(ConfigError::Validation(
                "players.o_name must be at most 20 characters".into(),
            ));
        }

        if self.ui.tick_rate_ms < 10 || self.ui.tick_rate_ms > 1000 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be in [10, 1000]".into(),
            ));
        }
        if self.ui.splash_duration_ms < 200 || self.ui.splash_duration_ms > 10_000 {
            return Err(ConfigError::Validation(
                "ui.splash_duration_ms must be in [200, 10000]".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_name_of_player() {
        let players = PlayersConfig::default();
        assert_eq!(players.name_of(Player::X), "Player X");
        assert_eq!(players.name_of(Player::O), "Player O");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
x_name = "Alice"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.x_name, "Alice");
        // Other fields should be defaults
        assert_eq!(config.players.o_name, "Player O");
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.splash);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.players.x_name, "Player X");
        assert_eq!(config.ui.splash_duration_ms, 2000);
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.players.x_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_identical_names() {
        let mut config = AppConfig::default();
        config.players.x_name = "Sam".to_string();
        config.players.o_name = "Sam".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_overlong_name() {
        let mut config = AppConfig::default();
        config.players.o_name = "O".repeat(21);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tick_rate_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 5;
        assert!(config.validate().is_err());

        config.ui.tick_rate_ms = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_splash_duration_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.splash_duration_ms = 50;
        assert!(config.validate().is_err());

        config.ui.splash_duration_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players.x_name, "Player X");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
x_name = "Alice"
o_name = "Bob"

[ui]
splash = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players.x_name, "Alice");
        assert_eq!(config.players.o_name, "Bob");
        assert!(!config.ui.splash);
        // Others are defaults
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
tick_rate_ms = 0
"#
        )
        .unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
