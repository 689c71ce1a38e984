use icondata::Icon;

use super::types::{AspectRatio, Mode, ModelTier, Resolution};

pub const HD_EXTENSION_WARNING: &str = "HD visualizations can't be extended.";
pub const FILE_READ_NOTICE: &str = "We couldn't read that file. Please try a different one.";

impl Mode {
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Standard => "Standard Shipment",
            Mode::MultiStop => "Multi-Stop Journey",
            Mode::SpecialHandling => "Special Handling",
            Mode::AddStop => "Add a Stop",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Mode::Standard => icondata::LuPackage,
            Mode::MultiStop => icondata::LuMap,
            Mode::SpecialHandling => icondata::LuShieldCheck,
            Mode::AddStop => icondata::LuPlusCircle,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Standard => "Describe your shipment (e.g., \"a box from Kampala to Gulu\")...",
            Mode::MultiStop => "Describe the journey between origin and destination (optional)...",
            Mode::SpecialHandling => "Describe special handling needs for the pictured items...",
            Mode::AddStop => "Describe the next stop or leg of the journey (optional)...",
        }
    }
}

impl ModelTier {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelTier::Standard => "Standard Freight",
            ModelTier::Priority => "Priority Express",
        }
    }
}

impl AspectRatio {
    pub fn display_name(self) -> &'static str {
        match self {
            AspectRatio::Landscape => "Vehicle Camera (16:9)",
            AspectRatio::Portrait => "Drone View (9:16)",
        }
    }
}

impl Resolution {
    pub fn display_name(self) -> &'static str {
        match self {
            Resolution::P720 => "Standard Quality",
            Resolution::P1080 => "High Definition",
        }
    }
}

/// Lookup used by `<select>` bindings, which only carry strings.
pub trait OptionLabel: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|v| v.label()).collect()
    }
}

impl OptionLabel for ModelTier {
    fn all() -> &'static [Self] {
        &ModelTier::ALL
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

impl OptionLabel for AspectRatio {
    fn all() -> &'static [Self] {
        &AspectRatio::ALL
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

impl OptionLabel for Resolution {
    fn all() -> &'static [Self] {
        &Resolution::ALL
    }

    fn label(self) -> &'static str {
        self.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_back_to_options() {
        for tier in ModelTier::ALL {
            assert_eq!(ModelTier::from_label(tier.label()), Some(tier));
        }
        assert_eq!(
            AspectRatio::from_label("Drone View (9:16)"),
            Some(AspectRatio::Portrait)
        );
        assert_eq!(Resolution::from_label("4K"), None);
        assert_eq!(
            Resolution::labels(),
            vec!["Standard Quality", "High Definition"]
        );
    }

    fn assert_selected_label_is_an_option<T: OptionLabel + std::fmt::Debug>() {
        for value in T::all() {
            assert!(
                T::labels().contains(&value.label()),
                "{value:?} renders {:?}, options are {:?}",
                value.label(),
                T::labels()
            );
        }
    }

    #[test]
    fn selected_label_matches_an_option() {
        assert_selected_label_is_an_option::<ModelTier>();
        assert_selected_label_is_an_option::<AspectRatio>();
        assert_selected_label_is_an_option::<Resolution>();
        assert_eq!(Resolution::P720.label(), "Standard Quality");
        assert_eq!(Resolution::P1080.label(), "High Definition");
    }

    #[test]
    fn every_mode_has_a_placeholder() {
        for mode in Mode::SELECTABLE.into_iter().chain([Mode::AddStop]) {
            assert!(mode.placeholder().ends_with("..."));
            assert!(!mode.display_name().is_empty());
        }
    }
}
