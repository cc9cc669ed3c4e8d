use crate::effect::EffectOptions;
use crate::error::PageError;
use crate::reveal::RevealMode;
use std::str::FromStr;

/// The three page layouts sharing this frontend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageVariant {
    #[default]
    Dots,
    Scene,
    Topology,
}

impl PageVariant {
    pub fn effect(self) -> EffectOptions {
        match self {
            PageVariant::Dots | PageVariant::Scene => EffectOptions::dots(),
            PageVariant::Topology => EffectOptions::topology(),
        }
    }

    // Topology pages never hide an element once revealed.
    pub fn reveal_mode(self) -> RevealMode {
        match self {
            PageVariant::Dots | PageVariant::Scene => RevealMode::Toggle,
            PageVariant::Topology => RevealMode::OneShot,
        }
    }

    /// Whether the page carries the THREE hero scene and drag controls.
    pub fn has_scene(self) -> bool {
        matches!(self, PageVariant::Scene)
    }

    /// Resolve the variant from the optional `data-variant` attribute.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, PageError> {
        match value {
            None => Ok(Self::default()),
            Some(v) => v.parse(),
        }
    }
}

impl FromStr for PageVariant {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dots" => Ok(PageVariant::Dots),
            "scene" => Ok(PageVariant::Scene),
            "topology" => Ok(PageVariant::Topology),
            _ => Err(PageError::UnknownVariant(s.to_string())),
        }
    }
}
