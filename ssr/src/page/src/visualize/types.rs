use serde::{Deserialize, Serialize};
use utils::file::FilePayload;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Text prompt only.
    #[default]
    Standard,
    /// Origin photo with an optional destination photo.
    MultiStop,
    /// Up to three item photos plus a required description.
    SpecialHandling,
    /// Continues a previously generated journey.
    AddStop,
}

impl Mode {
    /// Modes offered in the mode popover. `AddStop` is only reached by
    /// extending a result.
    pub const SELECTABLE: [Mode; 3] = [Mode::Standard, Mode::MultiStop, Mode::SpecialHandling];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelTier {
    #[default]
    Standard,
    Priority,
}

impl ModelTier {
    pub const ALL: [ModelTier; 2] = [ModelTier::Standard, ModelTier::Priority];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Landscape, AspectRatio::Portrait];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    P720,
    P1080,
}

impl Resolution {
    pub const ALL: [Resolution; 2] = [Resolution::P720, Resolution::P1080];

    /// HD results cannot be used as the input of an `AddStop` request.
    pub fn is_extendable(self) -> bool {
        self == Resolution::P720
    }
}

/// A file picked by the user, kept in memory for preview and submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub id: Uuid,
    pub payload: FilePayload,
}

impl MediaAttachment {
    pub fn new(payload: FilePayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
        }
    }

    pub fn preview_url(&self) -> String {
        self.payload.data_url()
    }

    pub fn file_name(&self) -> &str {
        &self.payload.file_name
    }
}

/// Opaque reference to a video the generation service can continue from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoHandle {
    /// A clip previously produced by the service.
    Generated { uri: String },
    /// A local upload whose bytes travel inline with the request.
    Uploaded { attachment_id: Uuid },
}

impl VideoHandle {
    pub fn for_upload(video: &MediaAttachment) -> Self {
        VideoHandle::Uploaded {
            attachment_id: video.id,
        }
    }
}

/// Media carried by a request. Each variant holds only what its mode reads,
/// so switching modes cannot leave stale attachments behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeMedia {
    #[default]
    Standard,
    MultiStop {
        origin: Option<MediaAttachment>,
        destination: Option<MediaAttachment>,
        round_trip: bool,
    },
    SpecialHandling {
        items: Vec<MediaAttachment>,
    },
    AddStop {
        video: Option<MediaAttachment>,
        handle: Option<VideoHandle>,
    },
}

impl ModeMedia {
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Standard => ModeMedia::Standard,
            Mode::MultiStop => ModeMedia::MultiStop {
                origin: None,
                destination: None,
                round_trip: false,
            },
            Mode::SpecialHandling => ModeMedia::SpecialHandling { items: Vec::new() },
            Mode::AddStop => ModeMedia::AddStop {
                video: None,
                handle: None,
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ModeMedia::Standard => Mode::Standard,
            ModeMedia::MultiStop { .. } => Mode::MultiStop,
            ModeMedia::SpecialHandling { .. } => Mode::SpecialHandling,
            ModeMedia::AddStop { .. } => Mode::AddStop,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Raw field contents; see [`GenerationRequest::tracking_number`].
    pub tracking_number: String,
    pub model_tier: ModelTier,
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
    pub media: ModeMedia,
}

impl GenerationRequest {
    pub fn mode(&self) -> Mode {
        self.media.mode()
    }

    pub fn tracking_number(&self) -> Option<&str> {
        let trimmed = self.tracking_number.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }

    pub fn start_image(&self) -> Option<&MediaAttachment> {
        match &self.media {
            ModeMedia::MultiStop { origin, .. } => origin.as_ref(),
            _ => None,
        }
    }

    pub fn end_image(&self) -> Option<&MediaAttachment> {
        match &self.media {
            ModeMedia::MultiStop { destination, .. } => destination.as_ref(),
            _ => None,
        }
    }

    pub fn loop_enabled(&self) -> bool {
        matches!(
            self.media,
            ModeMedia::MultiStop {
                round_trip: true,
                ..
            }
        )
    }

    pub fn reference_images(&self) -> &[MediaAttachment] {
        match &self.media {
            ModeMedia::SpecialHandling { items } => items,
            _ => &[],
        }
    }

    pub fn input_video(&self) -> Option<&MediaAttachment> {
        match &self.media {
            ModeMedia::AddStop { video, .. } => video.as_ref(),
            _ => None,
        }
    }

    pub fn input_video_handle(&self) -> Option<&VideoHandle> {
        match &self.media {
            ModeMedia::AddStop { handle, .. } => handle.as_ref(),
            _ => None,
        }
    }

    /// Seed for an `AddStop` follow-up to `result`. Keeps the tracking
    /// number, tier and viewpoint of the request that produced it.
    pub fn extend_from(
        previous: Option<&GenerationRequest>,
        result: &GeneratedVisualization,
    ) -> Option<GenerationRequest> {
        if !result.can_extend() {
            return None;
        }
        let handle = result.handle.clone()?;
        let previous = previous.cloned().unwrap_or_default();
        let mut next = GenerationRequest {
            prompt: String::new(),
            tracking_number: previous.tracking_number,
            model_tier: previous.model_tier,
            aspect_ratio: previous.aspect_ratio,
            resolution: Resolution::P720,
            media: ModeMedia::AddStop {
                video: None,
                handle: Some(handle),
            },
        };
        next.enforce_mode_options();
        Some(next)
    }
}

/// A finished clip as returned by the generation service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVisualization {
    pub video_url: String,
    pub handle: Option<VideoHandle>,
    pub resolution: Resolution,
    pub tracking_number: Option<String>,
}

impl GeneratedVisualization {
    pub fn can_extend(&self) -> bool {
        self.handle.is_some() && self.resolution.is_extendable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> MediaAttachment {
        MediaAttachment::new(FilePayload::from_bytes(name, "image/png", b"png"))
    }

    fn result(resolution: Resolution) -> GeneratedVisualization {
        GeneratedVisualization {
            video_url: "https://cdn.example/clip.mp4".to_string(),
            handle: Some(VideoHandle::Generated {
                uri: "https://cdn.example/clip.mp4".to_string(),
            }),
            resolution,
            tracking_number: Some("SX-UG-1988-KLA".to_string()),
        }
    }

    #[test]
    fn empty_media_matches_mode() {
        for mode in [
            Mode::Standard,
            Mode::MultiStop,
            Mode::SpecialHandling,
            Mode::AddStop,
        ] {
            assert_eq!(ModeMedia::empty(mode).mode(), mode);
        }
    }

    #[test]
    fn accessors_only_see_active_mode() {
        let request = GenerationRequest {
            media: ModeMedia::MultiStop {
                origin: Some(image("origin.png")),
                destination: None,
                round_trip: true,
            },
            ..Default::default()
        };
        assert!(request.start_image().is_some());
        assert!(request.loop_enabled());
        assert!(request.reference_images().is_empty());
        assert!(request.input_video_handle().is_none());
    }

    #[test]
    fn blank_tracking_number_is_absent() {
        let mut request = GenerationRequest {
            tracking_number: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.tracking_number(), None);

        request.tracking_number = " SX-UG-1988-KLA ".to_string();
        assert_eq!(request.tracking_number(), Some("SX-UG-1988-KLA"));
    }

    #[test]
    fn hd_results_cannot_be_extended() {
        assert!(result(Resolution::P720).can_extend());
        assert!(!result(Resolution::P1080).can_extend());

        let mut no_handle = result(Resolution::P720);
        no_handle.handle = None;
        assert!(!no_handle.can_extend());
    }

    #[test]
    fn extend_seeds_add_stop_from_result() {
        let previous = GenerationRequest {
            prompt: "a box from Kampala to Gulu".to_string(),
            tracking_number: "SX-UG-1988-KLA".to_string(),
            model_tier: ModelTier::Priority,
            aspect_ratio: AspectRatio::Portrait,
            resolution: Resolution::P720,
            media: ModeMedia::Standard,
        };
        let next = GenerationRequest::extend_from(Some(&previous), &result(Resolution::P720))
            .expect("720p result is extendable");

        assert_eq!(next.mode(), Mode::AddStop);
        assert!(next.prompt.is_empty());
        assert_eq!(next.tracking_number(), Some("SX-UG-1988-KLA"));
        assert_eq!(next.model_tier, ModelTier::Priority);
        assert_eq!(next.aspect_ratio, AspectRatio::Portrait);
        assert_eq!(next.resolution, Resolution::P720);
        assert!(matches!(
            next.input_video_handle(),
            Some(VideoHandle::Generated { .. })
        ));
    }

    #[test]
    fn extend_refuses_hd_result() {
        assert!(GenerationRequest::extend_from(None, &result(Resolution::P1080)).is_none());
    }
}
