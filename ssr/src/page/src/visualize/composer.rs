//! Field-level edits the prompt composer applies to its working request.

use consts::limits::MAX_REFERENCE_IMAGES;
use thiserror::Error;

use super::gate::SubmissionGate;
use super::types::{
    AspectRatio, GenerationRequest, MediaAttachment, Mode, ModeMedia, ModelTier, Resolution,
    VideoHandle,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposerError {
    #[error("at most {MAX_REFERENCE_IMAGES} item photos can be attached")]
    ReferenceLimit,
    #[error("the {slot} slot is not available in {mode:?} mode")]
    SlotUnavailable { slot: &'static str, mode: Mode },
}

/// Generation options that the active mode pins to a fixed value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionLocks {
    pub model_tier: bool,
    pub aspect_ratio: bool,
    pub resolution: bool,
}

impl OptionLocks {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::SpecialHandling => Self {
                model_tier: true,
                aspect_ratio: true,
                resolution: true,
            },
            Mode::AddStop => Self {
                model_tier: false,
                aspect_ratio: true,
                resolution: true,
            },
            Mode::Standard | Mode::MultiStop => Self::default(),
        }
    }
}

impl GenerationRequest {
    /// Replaces every field with `seed` (or the defaults). Nothing of the
    /// current state survives.
    pub fn reseed(&mut self, seed: Option<&GenerationRequest>) {
        *self = seed.cloned().unwrap_or_default();
        self.enforce_mode_options();
    }

    /// Switches mode, dropping all media and the round trip flag. Prompt,
    /// tracking number and options are kept apart from the mode's locks.
    pub fn select_mode(&mut self, mode: Mode) {
        self.media = ModeMedia::empty(mode);
        self.enforce_mode_options();
    }

    pub fn enforce_mode_options(&mut self) {
        match self.mode() {
            Mode::SpecialHandling => {
                self.model_tier = ModelTier::Priority;
                self.aspect_ratio = AspectRatio::default();
                self.resolution = Resolution::default();
            }
            Mode::AddStop => self.resolution = Resolution::P720,
            Mode::Standard | Mode::MultiStop => {}
        }
    }

    pub fn option_locks(&self) -> OptionLocks {
        OptionLocks::for_mode(self.mode())
    }

    pub fn set_model_tier(&mut self, tier: ModelTier) -> bool {
        if self.option_locks().model_tier {
            return false;
        }
        self.model_tier = tier;
        true
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) -> bool {
        if self.option_locks().aspect_ratio {
            return false;
        }
        self.aspect_ratio = aspect_ratio;
        true
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> bool {
        if self.option_locks().resolution {
            return false;
        }
        self.resolution = resolution;
        true
    }

    pub fn set_origin(&mut self, image: MediaAttachment) -> Result<(), ComposerError> {
        match &mut self.media {
            ModeMedia::MultiStop { origin, .. } => {
                *origin = Some(image);
                Ok(())
            }
            other => Err(ComposerError::SlotUnavailable {
                slot: "origin",
                mode: other.mode(),
            }),
        }
    }

    /// A round trip needs an origin, so clearing it also clears the flag.
    pub fn clear_origin(&mut self) {
        if let ModeMedia::MultiStop {
            origin, round_trip, ..
        } = &mut self.media
        {
            *origin = None;
            *round_trip = false;
        }
    }

    /// An explicit destination overrides a round trip.
    pub fn set_destination(&mut self, image: MediaAttachment) -> Result<(), ComposerError> {
        match &mut self.media {
            ModeMedia::MultiStop {
                destination,
                round_trip,
                ..
            } => {
                *destination = Some(image);
                *round_trip = false;
                Ok(())
            }
            other => Err(ComposerError::SlotUnavailable {
                slot: "destination",
                mode: other.mode(),
            }),
        }
    }

    pub fn clear_destination(&mut self) {
        if let ModeMedia::MultiStop { destination, .. } = &mut self.media {
            *destination = None;
        }
    }

    pub fn round_trip_available(&self) -> bool {
        matches!(
            self.media,
            ModeMedia::MultiStop {
                origin: Some(_),
                destination: None,
                ..
            }
        )
    }

    /// Returns whether the flag now holds `enabled`.
    pub fn set_round_trip(&mut self, enabled: bool) -> bool {
        let available = self.round_trip_available();
        match &mut self.media {
            ModeMedia::MultiStop { round_trip, .. } if available || !enabled => {
                *round_trip = enabled;
                true
            }
            _ => false,
        }
    }

    pub fn can_add_reference(&self) -> bool {
        matches!(
            &self.media,
            ModeMedia::SpecialHandling { items } if items.len() < MAX_REFERENCE_IMAGES
        )
    }

    pub fn add_reference(&mut self, image: MediaAttachment) -> Result<(), ComposerError> {
        match &mut self.media {
            ModeMedia::SpecialHandling { items } if items.len() >= MAX_REFERENCE_IMAGES => {
                Err(ComposerError::ReferenceLimit)
            }
            ModeMedia::SpecialHandling { items } => {
                items.push(image);
                Ok(())
            }
            other => Err(ComposerError::SlotUnavailable {
                slot: "item photo",
                mode: other.mode(),
            }),
        }
    }

    /// Removes the photo at `index`, keeping the others in order.
    pub fn remove_reference(&mut self, index: usize) -> Option<MediaAttachment> {
        match &mut self.media {
            ModeMedia::SpecialHandling { items } if index < items.len() => {
                Some(items.remove(index))
            }
            _ => None,
        }
    }

    /// Attaches a local video and resolves it to an upload handle.
    pub fn set_input_video(&mut self, video: MediaAttachment) -> Result<(), ComposerError> {
        match &mut self.media {
            ModeMedia::AddStop {
                video: slot,
                handle,
            } => {
                *handle = Some(VideoHandle::for_upload(&video));
                *slot = Some(video);
                Ok(())
            }
            other => Err(ComposerError::SlotUnavailable {
                slot: "previous journey",
                mode: other.mode(),
            }),
        }
    }

    pub fn clear_input_video(&mut self) {
        if let ModeMedia::AddStop { video, handle } = &mut self.media {
            *video = None;
            *handle = None;
        }
    }

    pub fn submission_gate(&self) -> SubmissionGate {
        SubmissionGate::evaluate(self)
    }

    /// The request to hand off, if the gate lets it through.
    pub fn submission(&self) -> Option<GenerationRequest> {
        self.submission_gate().is_enabled().then(|| self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::file::FilePayload;

    fn image(name: &str) -> MediaAttachment {
        MediaAttachment::new(FilePayload::from_bytes(name, "image/jpeg", name.as_bytes()))
    }

    fn video() -> MediaAttachment {
        MediaAttachment::new(FilePayload::from_bytes("leg.mp4", "video/mp4", b"mp4"))
    }

    fn composer(mode: Mode) -> GenerationRequest {
        let mut request = GenerationRequest {
            prompt: "a box from Kampala to Gulu".to_string(),
            tracking_number: "SX-UG-1988-KLA".to_string(),
            ..Default::default()
        };
        request.select_mode(mode);
        request
    }

    fn populated(mode: Mode) -> GenerationRequest {
        let mut request = composer(mode);
        match mode {
            Mode::Standard => {}
            Mode::MultiStop => {
                request.set_origin(image("origin")).unwrap();
                request.set_round_trip(true);
            }
            Mode::SpecialHandling => {
                request.add_reference(image("a")).unwrap();
                request.add_reference(image("b")).unwrap();
            }
            Mode::AddStop => request.set_input_video(video()).unwrap(),
        }
        request
    }

    #[test]
    fn mode_switch_clears_media_and_keeps_text() {
        let all = [
            Mode::Standard,
            Mode::MultiStop,
            Mode::SpecialHandling,
            Mode::AddStop,
        ];
        for from in all {
            for to in all {
                let mut request = populated(from);
                request.model_tier = ModelTier::Priority;
                request.aspect_ratio = AspectRatio::Portrait;
                request.select_mode(to);

                assert_eq!(request.media, ModeMedia::empty(to));
                assert!(!request.loop_enabled());
                assert_eq!(request.prompt, "a box from Kampala to Gulu");
                assert_eq!(request.tracking_number(), Some("SX-UG-1988-KLA"));
                assert_eq!(request.model_tier, ModelTier::Priority);
                if !request.option_locks().aspect_ratio {
                    assert_eq!(request.aspect_ratio, AspectRatio::Portrait);
                }
            }
        }
    }

    #[test]
    fn special_handling_pins_premium_defaults() {
        let mut request = composer(Mode::Standard);
        request.set_aspect_ratio(AspectRatio::Portrait);
        request.set_resolution(Resolution::P1080);

        request.select_mode(Mode::SpecialHandling);
        assert_eq!(request.model_tier, ModelTier::Priority);
        assert_eq!(request.aspect_ratio, AspectRatio::Landscape);
        assert_eq!(request.resolution, Resolution::P720);

        assert!(!request.set_model_tier(ModelTier::Standard));
        assert!(!request.set_resolution(Resolution::P1080));
        assert_eq!(request.model_tier, ModelTier::Priority);
    }

    #[test]
    fn add_stop_pins_standard_resolution() {
        let mut request = composer(Mode::Standard);
        request.set_resolution(Resolution::P1080);
        request.select_mode(Mode::AddStop);

        assert_eq!(request.resolution, Resolution::P720);
        assert!(!request.set_resolution(Resolution::P1080));
        assert!(request.set_model_tier(ModelTier::Priority));
    }

    #[test]
    fn round_trip_offered_with_origin_only() {
        let mut request = composer(Mode::MultiStop);
        assert!(!request.round_trip_available());
        assert!(!request.set_round_trip(true));

        request.set_origin(image("origin")).unwrap();
        assert!(request.round_trip_available());
        assert!(request.set_round_trip(true));
        assert!(request.loop_enabled());

        request.set_destination(image("destination")).unwrap();
        assert!(!request.loop_enabled());
        assert!(!request.round_trip_available());
        assert!(!request.set_round_trip(true));

        request.clear_destination();
        assert!(request.round_trip_available());
    }

    #[test]
    fn clearing_origin_disables_round_trip() {
        let mut request = composer(Mode::MultiStop);
        request.set_origin(image("origin")).unwrap();
        request.set_round_trip(true);

        request.clear_origin();
        assert!(!request.loop_enabled());
        assert!(request.start_image().is_none());
    }

    #[test]
    fn item_photos_capped_at_three() {
        let mut request = composer(Mode::SpecialHandling);
        for name in ["a", "b", "c"] {
            assert!(request.can_add_reference());
            request.add_reference(image(name)).unwrap();
        }
        assert!(!request.can_add_reference());
        assert_eq!(
            request.add_reference(image("d")),
            Err(ComposerError::ReferenceLimit)
        );
        assert_eq!(request.reference_images().len(), 3);
    }

    #[test]
    fn removing_item_photo_keeps_order() {
        let mut request = composer(Mode::SpecialHandling);
        let photos = [image("a"), image("b"), image("c")];
        for photo in &photos {
            request.add_reference(photo.clone()).unwrap();
        }

        let removed = request.remove_reference(1);
        assert_eq!(removed.as_ref(), Some(&photos[1]));
        assert_eq!(request.reference_images(), &[photos[0].clone(), photos[2].clone()]);
        assert!(request.can_add_reference());

        assert!(request.remove_reference(5).is_none());
        assert_eq!(request.reference_images().len(), 2);
    }

    #[test]
    fn slots_reject_other_modes() {
        let mut request = composer(Mode::Standard);
        assert_eq!(
            request.set_origin(image("origin")),
            Err(ComposerError::SlotUnavailable {
                slot: "origin",
                mode: Mode::Standard
            })
        );
        assert!(request.add_reference(image("a")).is_err());
        assert!(request.set_input_video(video()).is_err());
        assert_eq!(request.media, ModeMedia::Standard);
    }

    #[test]
    fn selecting_video_resolves_handle() {
        let mut request = composer(Mode::AddStop);
        request.prompt.clear();
        assert!(request.submission().is_none());

        let clip = video();
        request.set_input_video(clip.clone()).unwrap();
        assert_eq!(
            request.input_video_handle(),
            Some(&VideoHandle::Uploaded {
                attachment_id: clip.id
            })
        );
        assert!(request.submission().is_some());

        request.clear_input_video();
        assert!(request.input_video().is_none());
        assert!(request.input_video_handle().is_none());
        assert!(request.submission().is_none());
    }

    #[test]
    fn reseed_overwrites_everything() {
        let mut request = populated(Mode::SpecialHandling);
        let seed = populated(Mode::MultiStop);
        request.reseed(Some(&seed));
        assert_eq!(request, seed);

        request.reseed(None);
        assert_eq!(request, GenerationRequest::default());
    }

    #[test]
    fn submission_follows_gate() {
        let mut request = composer(Mode::Standard);
        assert_eq!(request.submission().as_ref(), Some(&request));

        request.prompt = "   ".to_string();
        assert!(request.submission().is_none());
        assert!(request.submission_gate().is_disabled);
    }
}
