// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed lookup results

use crate::vocab;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// One completed lookup, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub word: String,
    pub translation: &'static str,
    pub found: bool,
}

impl Translation {
    /// Look up `word` (case-folded) and record whether it hit the table.
    pub fn of(word: &str) -> Self {
        let key = word.to_lowercase();
        match vocab::lookup(&key) {
            Some(translation) => Self {
                word: key,
                translation,
                found: true,
            },
            None => Self {
                word: key,
                translation: vocab::FALLBACK,
                found: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn serialize(&self, result: &Translation) -> Result<String> {
        match self {
            // Text output is the bare translation; scripts pipe this.
            OutputFormat::Text => Ok(result.translation.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(result)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_is_the_bare_translation() {
        let hit = Translation::of("Weather");
        assert_eq!(OutputFormat::Text.serialize(&hit).unwrap(), "clima");

        let miss = Translation::of("ocean");
        assert_eq!(
            OutputFormat::Text.serialize(&miss).unwrap(),
            vocab::FALLBACK
        );
    }

    #[test]
    fn of_records_hit_and_miss() {
        assert!(Translation::of("rain").found);
        assert!(!Translation::of("sun").found);
        // the normalized key is what gets reported back
        assert_eq!(Translation::of("EARTH").word, "earth");
    }

    #[test]
    fn json_output_carries_all_fields() {
        let rendered = OutputFormat::Json
            .serialize(&Translation::of("rain"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["word"], "rain");
        assert_eq!(value["translation"], "chuva");
        assert_eq!(value["found"], true);
    }
}
