use std::collections::HashMap;

use eyre::{ensure, Result};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct ConfigFile {
    pub card: CardConfig,
    #[serde(default = "default_states_file")]
    pub states_file: String,
}

/// Card configuration, merged over defaults at parse time and never
/// mutated afterward. A reconfigured card gets a fresh value.
#[derive(Deserialize, Clone)]
pub struct CardConfig {
    #[serde(default)]
    pub entity: String,
    #[serde(default = "default_count")]
    pub count: i64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_platform: bool,
    #[serde(default = "default_true")]
    pub show_destination: bool,
    #[serde(default = "default_true")]
    pub show_line: bool,
    #[serde(default = "default_true")]
    pub show_relative: bool,
    /// Color overrides keyed by the resolved line label (not the raw
    /// category code), e.g. `S31: "#ff0000"`.
    #[serde(default)]
    pub line_colors: HashMap<String, String>,
}

impl CardConfig {
    /// Setup-time check. A card without an entity id is a configuration
    /// error and must abort setup rather than default to anything.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.entity.is_empty(),
            "card configuration must define an entity"
        );
        Ok(())
    }

    /// Maximum number of rows to show, clamped to zero or more.
    pub fn row_limit(&self) -> usize {
        self.count.max(0) as usize
    }
}

fn default_states_file() -> String {
    "states.json".to_string()
}

fn default_count() -> i64 {
    6
}

fn default_title() -> String {
    "Next departures".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied_over_minimal_config() {
        let config: CardConfig =
            serde_yaml::from_str("entity: sensor.zurich_hb_departures").unwrap();

        assert_eq!(config.entity, "sensor.zurich_hb_departures");
        assert_eq!(config.count, 6);
        assert_eq!(config.title, "Next departures");
        assert!(config.show_platform);
        assert!(config.show_destination);
        assert!(config.show_line);
        assert!(config.show_relative);
        assert!(config.line_colors.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_entity_fails_validation() {
        let config: CardConfig = serde_yaml::from_str("count: 3").unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: CardConfig = serde_yaml::from_str(
            "entity: sensor.stop\ncount: 2\ntitle: Tram stop\nshow_platform: false\nline_colors:\n  S31: '#ff0000'\n",
        )
        .unwrap();

        assert_eq!(config.count, 2);
        assert_eq!(config.title, "Tram stop");
        assert!(!config.show_platform);
        assert_eq!(config.line_colors["S31"], "#ff0000");
    }

    #[test]
    fn row_limit_clamps_negative_count() {
        let config: CardConfig =
            serde_yaml::from_str("entity: sensor.stop\ncount: -4").unwrap();

        assert_eq!(config.row_limit(), 0);
    }
}
