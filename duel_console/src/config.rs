use std::path::Path;

use anyhow::Context;
use duel_chess::PieceStyle;
use serde::{Deserialize, Serialize};


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub pictograms: PieceStyle,
    pub colored: bool,
    // Default filter for `env_logger`; `RUST_LOG` takes precedence.
    pub log_level: String,
    pub show_archive: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            pictograms: PieceStyle::Unicode,
            colored: true,
            log_level: "warn".to_owned(),
            show_archive: true,
        }
    }
}

pub fn read_config_file(path: &Path) -> anyhow::Result<ConsoleConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'.", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file '{}'.", path.display()))
}

pub fn parse_config(yaml: &str) -> anyhow::Result<ConsoleConfig> { Ok(serde_yaml::from_str(yaml)?) }


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = parse_config("pictograms: ascii\nshow_archive: false\n").unwrap();
        assert_eq!(config, ConsoleConfig {
            pictograms: PieceStyle::Ascii,
            show_archive: false,
            ..ConsoleConfig::default()
        });
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(parse_config("pictograms: emoji\n").is_err());
    }
}
