use std::num::ParseIntError;
use std::time::Duration;

use axum::extract::FromRef;
use consts::{env, limits::DEFAULT_PREVIEW_LATENCY, FALLBACK_PREVIEW_VIDEO_URL};
use leptos::prelude::*;
use leptos_axum::AxumRouteListing;
use thiserror::Error;

#[derive(FromRef, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub routes: Vec<AxumRouteListing>,
    pub preview: PreviewConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidLatency {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings of the stand-in video provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewConfig {
    pub video_url: String,
    pub latency: Duration,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            video_url: FALLBACK_PREVIEW_VIDEO_URL.to_string(),
            latency: DEFAULT_PREVIEW_LATENCY,
        }
    }
}

impl PreviewConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = read(env::PREVIEW_VIDEO_URL) {
            config.video_url = url;
        }
        if let Some(value) = read(env::PREVIEW_LATENCY_MS) {
            let millis = value
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidLatency {
                    var: env::PREVIEW_LATENCY_MS,
                    value,
                    source,
                })?;
            config.latency = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = PreviewConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.latency, Duration::from_millis(4000));
    }

    #[test]
    fn reads_overrides() {
        let config = PreviewConfig::from_lookup(lookup(&[
            ("SHIPMENT_PREVIEW_VIDEO_URL", "https://cdn.example/clip.mp4"),
            ("SHIPMENT_PREVIEW_LATENCY_MS", " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.video_url, "https://cdn.example/clip.mp4");
        assert_eq!(config.latency, Duration::from_millis(250));
    }

    #[test]
    fn blank_url_keeps_fallback() {
        let config =
            PreviewConfig::from_lookup(lookup(&[("SHIPMENT_PREVIEW_VIDEO_URL", "  ")])).unwrap();
        assert_eq!(config.video_url, FALLBACK_PREVIEW_VIDEO_URL);
    }

    #[test]
    fn rejects_non_numeric_latency() {
        let err = PreviewConfig::from_lookup(lookup(&[("SHIPMENT_PREVIEW_LATENCY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidLatency { ref value, .. } if value == "soon"
        ));
    }
}
