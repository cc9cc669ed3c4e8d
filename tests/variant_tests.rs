// Host-side tests for page variant selection and the background effect options.

use page_core::{EffectKind, OptionValue, PageError, PageVariant};

#[test]
fn parses_attribute_case_insensitively() {
    assert_eq!("dots".parse::<PageVariant>(), Ok(PageVariant::Dots));
    assert_eq!(" Scene ".parse::<PageVariant>(), Ok(PageVariant::Scene));
    assert_eq!("TOPOLOGY".parse::<PageVariant>(), Ok(PageVariant::Topology));
}

#[test]
fn unknown_variant_is_an_error() {
    assert_eq!(
        "waves".parse::<PageVariant>(),
        Err(PageError::UnknownVariant("waves".to_string()))
    );
}

#[test]
fn missing_attribute_defaults_to_dots() {
    assert_eq!(PageVariant::from_attribute(None), Ok(PageVariant::Dots));
}

#[test]
fn only_scene_variant_has_scene() {
    assert!(PageVariant::Scene.has_scene());
    assert!(!PageVariant::Dots.has_scene());
    assert!(!PageVariant::Topology.has_scene());
}

#[test]
fn effect_per_variant() {
    assert_eq!(PageVariant::Dots.effect().kind(), EffectKind::Dots);
    assert_eq!(PageVariant::Scene.effect().kind(), EffectKind::Dots);
    assert_eq!(PageVariant::Topology.effect().kind(), EffectKind::Topology);
}

#[test]
fn dots_options_match_page_literals() {
    let entries = PageVariant::Dots.effect().entries();
    let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "el",
            "mouseControls",
            "touchControls",
            "gyroControls",
            "minHeight",
            "minWidth",
            "scale",
            "scaleMobile",
            "size",
            "spacing"
        ]
    );
    assert_eq!(entries[0].1, OptionValue::Text("#vanta-bg"));
    assert_eq!(entries[1].1, OptionValue::Bool(true));
    assert_eq!(entries[4].1, OptionValue::Number(200.0));
    assert_eq!(entries[8].1, OptionValue::Number(3.9));
    assert_eq!(entries[9].1, OptionValue::Number(31.0));
}
