//! Pass configuration.
//!
//! [`OptionsConfig`] is the serializable form (every field optional, see
//! [`OptionsConfig::default`]); [`Options`] is the compiled, read-only form
//! handed to every part of the pass.

use std::{collections::BTreeSet, fs, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pathing::CdnPathing;

/// Errors loading or compiling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `{field}` pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("asset marker pattern `{field}` must have a capture group")]
    MissingCapture { field: &'static str },

    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable pass configuration.
///
/// # Example
///
/// ```json
/// {
///   "passThroughKey": "$pass-through",
///   "reservedEventValues": ["[[none]]"],
///   "assetHost": "https://assets.example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsConfig {
    /// Behavior values matching this pattern are expanded
    pub behavior_setter_pattern: String,
    /// Event values left as literals
    pub reserved_event_values: Vec<String>,
    /// Events property whose nested object is forwarded unprocessed
    pub pass_through_key: String,
    pub behaviors_facet_key: String,
    pub events_facet_key: String,
    /// Ordinary asset marker; capture 1 is the relative asset path
    pub asset_marker_pattern: String,
    /// CDN marker; optional capture 1 is the source module
    pub cdn_marker_pattern: String,
    pub asset_host: String,
    pub asset_api_version: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        OptionsConfig {
            behavior_setter_pattern: r"^\[\[[\w\-|:]+\]\]$".to_string(),
            reserved_event_values: vec!["[[none]]".to_string()],
            pass_through_key: "$pass-through".to_string(),
            behaviors_facet_key: "behaviors".to_string(),
            events_facet_key: "events".to_string(),
            asset_marker_pattern: r"\{\{@([^{}|]+)\}\}".to_string(),
            cdn_marker_pattern: r"\{\{@CDN_PATH(?:\|([^{}|]+))?\}\}".to_string(),
            asset_host: "https://assets.famo.us".to_string(),
            asset_api_version: "v1".to_string(),
        }
    }
}

impl OptionsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Compiles the patterns into [`Options`].
    pub fn compile(&self) -> Result<Options, ConfigError> {
        let asset_marker_regex = compile("assetMarkerPattern", &self.asset_marker_pattern)?;
        if asset_marker_regex.captures_len() < 2 {
            return Err(ConfigError::MissingCapture { field: "assetMarkerPattern" });
        }

        Ok(Options {
            behavior_setter_regex: compile("behaviorSetterPattern", &self.behavior_setter_pattern)?,
            reserved_event_values: self.reserved_event_values.iter().cloned().collect(),
            pass_through_key: self.pass_through_key.clone(),
            behaviors_facet_key: self.behaviors_facet_key.clone(),
            events_facet_key: self.events_facet_key.clone(),
            asset_marker_regex,
            cdn_marker_regex: compile("cdnMarkerPattern", &self.cdn_marker_pattern)?,
            pathing: CdnPathing::new(&self.asset_host, &self.asset_api_version),
        })
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { field, source })
}

/// Compiled pass configuration. Read-only for the duration of a pass.
#[derive(Debug, Clone)]
pub struct Options {
    pub behavior_setter_regex: Regex,
    pub reserved_event_values: BTreeSet<String>,
    pub pass_through_key: String,
    pub behaviors_facet_key: String,
    pub events_facet_key: String,
    pub asset_marker_regex: Regex,
    pub cdn_marker_regex: Regex,
    pub pathing: CdnPathing,
}

impl Options {
    /// Options compiled from [`OptionsConfig::default`].
    pub fn standard() -> Result<Self, ConfigError> {
        OptionsConfig::default().compile()
    }

    pub fn is_reserved_event_value(&self, value: &str) -> bool {
        self.reserved_event_values.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = OptionsConfig::from_json_str(r#"{"passThroughKey": "$raw"}"#).unwrap();
        assert_eq!(config.pass_through_key, "$raw");
        assert_eq!(config.events_facet_key, "events");
    }

    #[test]
    fn bad_pattern_names_field() {
        let config = OptionsConfig {
            behavior_setter_pattern: "([".to_string(),
            ..OptionsConfig::default()
        };
        let err = config.compile().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { field: "behaviorSetterPattern", .. }));
    }

    #[test]
    fn asset_pattern_needs_capture() {
        let config = OptionsConfig {
            asset_marker_pattern: r"\{\{@asset\}\}".to_string(),
            ..OptionsConfig::default()
        };
        assert!(matches!(config.compile(), Err(ConfigError::MissingCapture { .. })));
    }
}
