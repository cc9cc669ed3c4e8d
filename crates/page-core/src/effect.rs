//! Option sets for the VANTA background effects.
//!
//! The effect library owns all simulation and rendering; the page only hands
//! it one literal configuration object at startup. These types keep those
//! literals in one place so the frontend can turn them into a JS object and
//! tests can check them without a browser.

use crate::constants::VANTA_CONTAINER;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Dots,
    Topology,
}

impl EffectKind {
    /// Name of the constructor on the `VANTA` global.
    pub fn constructor(self) -> &'static str {
        match self {
            EffectKind::Dots => "DOTS",
            EffectKind::Topology => "TOPOLOGY",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub enum KindOptions {
    Dots { size: f64, spacing: f64 },
    Topology { color: u32, background_color: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectOptions {
    pub el: &'static str,
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    pub kind: KindOptions,
}

impl EffectOptions {
    pub fn dots() -> Self {
        Self {
            kind: KindOptions::Dots {
                size: 3.9,
                spacing: 31.0,
            },
            ..Self::base()
        }
    }

    pub fn topology() -> Self {
        Self {
            kind: KindOptions::Topology {
                color: 0x89964e,
                background_color: 0x002222,
            },
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            el: VANTA_CONTAINER,
            mouse_controls: true,
            touch_controls: true,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            kind: KindOptions::Dots {
                size: 3.9,
                spacing: 31.0,
            },
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self.kind {
            KindOptions::Dots { .. } => EffectKind::Dots,
            KindOptions::Topology { .. } => EffectKind::Topology,
        }
    }

    /// Options in the order and spelling the library expects.
    pub fn entries(&self) -> Vec<(&'static str, OptionValue)> {
        let mut out = vec![
            ("el", OptionValue::Text(self.el)),
            ("mouseControls", OptionValue::Bool(self.mouse_controls)),
            ("touchControls", OptionValue::Bool(self.touch_controls)),
            ("gyroControls", OptionValue::Bool(self.gyro_controls)),
            ("minHeight", OptionValue::Number(self.min_height)),
            ("minWidth", OptionValue::Number(self.min_width)),
            ("scale", OptionValue::Number(self.scale)),
            ("scaleMobile", OptionValue::Number(self.scale_mobile)),
        ];
        match self.kind {
            KindOptions::Dots { size, spacing } => {
                out.push(("size", OptionValue::Number(size)));
                out.push(("spacing", OptionValue::Number(spacing)));
            }
            KindOptions::Topology {
                color,
                background_color,
            } => {
                out.push(("color", OptionValue::Number(color as f64)));
                out.push((
                    "backgroundColor",
                    OptionValue::Number(background_color as f64),
                ));
            }
        }
        out
    }
}
