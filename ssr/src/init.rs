use leptos::prelude::*;
use leptos_axum::AxumRouteListing;
use state::server::{AppState, ConfigError, PreviewConfig};

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    pub fn build(self) -> Result<AppState, ConfigError> {
        let preview = PreviewConfig::from_env()?;
        tracing::info!(
            video_url = %preview.video_url,
            latency_ms = preview.latency.as_millis() as u64,
            "preview backend configured"
        );

        Ok(AppState {
            leptos_options: self.leptos_options,
            routes: self.routes,
            preview,
        })
    }
}
