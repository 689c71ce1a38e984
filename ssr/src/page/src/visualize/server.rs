use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use super::types::{GeneratedVisualization, GenerationRequest};

/// Renders a shipment visualization for a composed request.
#[server(endpoint = "generate_visualization", input = Json, output = Json)]
pub async fn generate_visualization(
    request: GenerationRequest,
) -> Result<GeneratedVisualization, ServerFnError> {
    use super::gate::SubmissionGate;
    use crate::visualize::server::backend::PreviewBackend;
    use state::server::PreviewConfig;

    // The composer disables submit for these, but the endpoint is public.
    if let Err(reason) = SubmissionGate::check(&request) {
        log::warn!("rejected visualization request: {reason}");
        return Err(ServerFnError::new(reason));
    }

    let config = use_context::<PreviewConfig>()
        .ok_or_else(|| ServerFnError::new("Preview backend is not configured"))?;

    Ok(PreviewBackend::new(config).render(&request).await)
}

#[cfg(feature = "ssr")]
pub mod backend {
    use state::server::PreviewConfig;

    use crate::visualize::types::{GeneratedVisualization, GenerationRequest, VideoHandle};

    /// Stands in for the generative video provider: waits out the configured
    /// render time and hands back the configured clip.
    #[derive(Clone, Debug)]
    pub struct PreviewBackend {
        config: PreviewConfig,
    }

    impl PreviewBackend {
        pub fn new(config: PreviewConfig) -> Self {
            Self { config }
        }

        #[tracing::instrument(skip_all, fields(mode = ?request.mode(), resolution = ?request.resolution))]
        pub async fn render(&self, request: &GenerationRequest) -> GeneratedVisualization {
            tracing::debug!(latency_ms = self.config.latency.as_millis() as u64, "rendering preview");
            tokio::time::sleep(self.config.latency).await;

            let video_url = self.config.video_url.clone();
            // HD clips cannot seed a follow-up stop.
            let handle = request.resolution.is_extendable().then(|| VideoHandle::Generated {
                uri: video_url.clone(),
            });
            tracing::info!(extendable = handle.is_some(), "preview ready");

            GeneratedVisualization {
                video_url,
                handle,
                resolution: request.resolution,
                tracking_number: request.tracking_number().map(str::to_string),
            }
        }
    }

}
