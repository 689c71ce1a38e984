use super::types::{GenerationRequest, ModeMedia};

pub const MISSING_DESCRIPTION: &str = "Please enter a shipment description.";
pub const MISSING_ORIGIN: &str = "An origin photo is required.";
pub const MISSING_ITEMS_AND_DESCRIPTION: &str =
    "Please add item photo(s) and enter a description.";
pub const MISSING_ITEMS: &str = "At least one item photo is required.";
pub const MISSING_ITEM_DESCRIPTION: &str = "Please enter a description.";
pub const MISSING_JOURNEY: &str = "An existing journey visualization is required to add a stop.";

/// Whether the composer may submit, and why not when it may not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionGate {
    pub is_disabled: bool,
    pub reason: &'static str,
}

impl SubmissionGate {
    const OPEN: Self = Self {
        is_disabled: false,
        reason: "",
    };

    fn closed(reason: &'static str) -> Self {
        Self {
            is_disabled: true,
            reason,
        }
    }

    pub fn evaluate(request: &GenerationRequest) -> Self {
        let has_prompt = request.has_prompt();
        match &request.media {
            ModeMedia::Standard if !has_prompt => Self::closed(MISSING_DESCRIPTION),
            ModeMedia::MultiStop { origin: None, .. } => Self::closed(MISSING_ORIGIN),
            ModeMedia::SpecialHandling { items } => match (items.is_empty(), has_prompt) {
                (true, false) => Self::closed(MISSING_ITEMS_AND_DESCRIPTION),
                (true, true) => Self::closed(MISSING_ITEMS),
                (false, false) => Self::closed(MISSING_ITEM_DESCRIPTION),
                (false, true) => Self::OPEN,
            },
            ModeMedia::AddStop { handle: None, .. } => Self::closed(MISSING_JOURNEY),
            _ => Self::OPEN,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.is_disabled
    }

    pub fn check(request: &GenerationRequest) -> Result<(), &'static str> {
        let gate = Self::evaluate(request);
        if gate.is_disabled {
            Err(gate.reason)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualize::types::{MediaAttachment, Mode, VideoHandle};
    use utils::file::FilePayload;

    fn image() -> MediaAttachment {
        MediaAttachment::new(FilePayload::from_bytes("crate.png", "image/png", b"png"))
    }

    fn request(prompt: &str, media: ModeMedia) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            media,
            ..Default::default()
        }
    }

    #[test]
    fn standard_needs_description() {
        let gate = SubmissionGate::evaluate(&request("", ModeMedia::Standard));
        assert!(gate.is_disabled);
        assert_eq!(gate.reason, "Please enter a shipment description.");

        let gate = SubmissionGate::evaluate(&request("ship a box", ModeMedia::Standard));
        assert!(gate.is_enabled());
        assert!(gate.reason.is_empty());
    }

    #[test]
    fn whitespace_prompt_counts_as_empty() {
        let gate = SubmissionGate::evaluate(&request(" \n\t ", ModeMedia::Standard));
        assert_eq!(gate.reason, MISSING_DESCRIPTION);
    }

    #[test]
    fn multi_stop_needs_origin_only() {
        let gate = SubmissionGate::evaluate(&request("", ModeMedia::empty(Mode::MultiStop)));
        assert_eq!(gate.reason, "An origin photo is required.");

        let with_origin = ModeMedia::MultiStop {
            origin: Some(image()),
            destination: None,
            round_trip: false,
        };
        assert!(SubmissionGate::evaluate(&request("", with_origin)).is_enabled());
    }

    #[test]
    fn special_handling_reasons_in_order() {
        let none = ModeMedia::empty(Mode::SpecialHandling);
        let some = ModeMedia::SpecialHandling {
            items: vec![image()],
        };

        assert_eq!(
            SubmissionGate::evaluate(&request("", none.clone())).reason,
            MISSING_ITEMS_AND_DESCRIPTION
        );
        assert_eq!(
            SubmissionGate::evaluate(&request("fragile", none)).reason,
            MISSING_ITEMS
        );
        assert_eq!(
            SubmissionGate::evaluate(&request("", some.clone())).reason,
            MISSING_ITEM_DESCRIPTION
        );
        assert!(SubmissionGate::evaluate(&request("fragile", some)).is_enabled());
    }

    #[test]
    fn add_stop_needs_handle_not_file() {
        let gate = SubmissionGate::evaluate(&request("", ModeMedia::empty(Mode::AddStop)));
        assert_eq!(
            gate.reason,
            "An existing journey visualization is required to add a stop."
        );

        let video = MediaAttachment::new(FilePayload::from_bytes("leg.mp4", "video/mp4", b"mp4"));
        let file_only = ModeMedia::AddStop {
            video: Some(video.clone()),
            handle: None,
        };
        assert!(SubmissionGate::evaluate(&request("", file_only)).is_disabled);

        let resolved = ModeMedia::AddStop {
            handle: Some(VideoHandle::for_upload(&video)),
            video: Some(video),
        };
        assert!(SubmissionGate::evaluate(&request("", resolved)).is_enabled());
    }

    #[test]
    fn disabled_always_has_reason() {
        let cases = [
            request("", ModeMedia::Standard),
            request("", ModeMedia::empty(Mode::MultiStop)),
            request("", ModeMedia::empty(Mode::SpecialHandling)),
            request("x", ModeMedia::empty(Mode::SpecialHandling)),
            request("", ModeMedia::empty(Mode::AddStop)),
        ];
        for case in &cases {
            let gate = SubmissionGate::evaluate(case);
            assert!(gate.is_disabled);
            assert!(!gate.reason.is_empty());
            assert_eq!(SubmissionGate::check(case), Err(gate.reason));
        }
    }
}
