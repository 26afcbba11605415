use serde::{Deserialize, Serialize};

use crate::game::Difficulty;
use crate::session::{GameMode, PlayerMark};
use super::validate::Validate;

pub const KNOWN_THEMES: &[&str] = &["classic", "dark", "neon"];

const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    // Which mark the human plays in bot mode; ignored elsewhere.
    pub player_mark: PlayerMark,
    pub theme: String,
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Bot,
            difficulty: Difficulty::Medium,
            player_mark: PlayerMark::X,
            theme: "classic".to_string(),
            bot_delay_ms: 500,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !KNOWN_THEMES.contains(&self.theme.as_str()) {
            return Err(format!(
                "Unknown theme '{}', expected one of: {}",
                self.theme,
                KNOWN_THEMES.join(", ")
            ));
        }
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut config = GameConfig::default();
        config.theme = "sparkle".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_bot_delay_is_rejected() {
        let mut config = GameConfig::default();
        config.bot_delay_ms = 60_000;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_fields_use_lowercase_tags() {
        let config = GameConfig::default();
        let yaml = serde_yaml_ng::to_string(&config).unwrap();

        assert!(yaml.contains("mode: bot"));
        assert!(yaml.contains("difficulty: medium"));
        assert!(yaml.contains("player_mark: x"));
    }
}
