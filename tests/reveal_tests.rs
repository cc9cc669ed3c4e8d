// Host-side tests for reveal-on-scroll rules per page variant.

use page_core::{reveal_action, ObserverConfig, PageVariant, RevealAction, RevealMode};

#[test]
fn observer_uses_fifth_of_element() {
    let cfg = ObserverConfig::default();
    assert_eq!(cfg.threshold, 0.2);
    assert_eq!(cfg.root_margin, "0px");
}

#[test]
fn entering_viewport_always_reveals() {
    for v in [PageVariant::Dots, PageVariant::Scene, PageVariant::Topology] {
        assert_eq!(reveal_action(v.reveal_mode(), true), RevealAction::Add);
    }
}

#[test]
fn leaving_viewport_depends_on_variant() {
    // Topology pages reveal once; the other two fade back out.
    assert_eq!(reveal_action(PageVariant::Dots.reveal_mode(), false), RevealAction::Remove);
    assert_eq!(reveal_action(PageVariant::Scene.reveal_mode(), false), RevealAction::Remove);
    assert_eq!(reveal_action(PageVariant::Topology.reveal_mode(), false), RevealAction::Keep);
}

#[test]
fn ratio_crossing_sequence_toggles_marker() {
    let cfg = ObserverConfig::default();
    let ratios = [0.0, 0.1, 0.25, 0.6, 0.15, 0.0, 0.3];
    for (mode, expected_final) in [(RevealMode::Toggle, true), (RevealMode::OneShot, true)] {
        let mut visible = false;
        let mut history = Vec::new();
        for r in ratios {
            match reveal_action(mode, cfg.crosses(r)) {
                RevealAction::Add => visible = true,
                RevealAction::Remove => visible = false,
                RevealAction::Keep => {}
            }
            history.push(visible);
        }
        assert_eq!(*history.last().unwrap(), expected_final);
        // After dropping to 0.15 the toggle page hides again, the one-shot page does not.
        assert_eq!(history[4], mode == RevealMode::OneShot);
    }
}

#[test]
fn entry_actions_follow_ratio_not_overlap() {
    // Every entry here still overlaps the viewport; only the ratio decides.
    let cfg = ObserverConfig::default();
    let ratios = [0.05, 0.6, 0.15];
    let toggle: Vec<_> = ratios.iter().map(|r| cfg.action_for(RevealMode::Toggle, *r)).collect();
    assert_eq!(toggle, [RevealAction::Remove, RevealAction::Add, RevealAction::Remove]);
    let once: Vec<_> = ratios.iter().map(|r| cfg.action_for(RevealMode::OneShot, *r)).collect();
    assert_eq!(once, [RevealAction::Keep, RevealAction::Add, RevealAction::Keep]);
}

#[test]
fn only_one_shot_stops_observing() {
    assert!(RevealMode::OneShot.unobserve_after_reveal());
    assert!(!RevealMode::Toggle.unobserve_after_reveal());
}
