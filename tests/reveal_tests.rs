// Host-side tests for the entrance-animation table and tween state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

const VIEWPORT: f64 = 800.0;

fn spec_for(targets: &str) -> RevealSpec {
    *ENTRANCE_ANIMATIONS
        .iter()
        .find(|s| s.targets == targets)
        .unwrap()
}

fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn table_covers_every_section() {
    let targets: Vec<_> = ENTRANCE_ANIMATIONS.iter().map(|s| s.targets).collect();
    assert_eq!(
        targets,
        [
            ".hero-content",
            ".feature-card",
            ".showcase-content",
            ".mockup",
            ".testimonial-card",
            ".pricing-card"
        ]
    );
    for s in ENTRANCE_ANIMATIONS {
        assert_eq!(s.to, Pose::SETTLED);
        assert_eq!(s.ease, Ease::Power3Out);
    }
}

#[test]
fn card_groups_share_timing() {
    for t in [".feature-card", ".testimonial-card", ".pricing-card"] {
        let s = spec_for(t);
        assert_eq!(s.from, Pose::CARD_START);
        assert!(near(s.duration, 0.8));
        assert!(near(s.stagger, 0.2));
        assert_eq!(s.delay, 0.0);
    }
    assert_eq!(spec_for(".mockup").from.offset_y, 0.0);
    assert!(near(spec_for(".mockup").delay, 0.3));
    assert_eq!(
        spec_for(".mockup").trigger,
        spec_for(".showcase-content").trigger
    );
}

#[test]
fn trigger_fires_at_viewport_centre() {
    let t = Trigger::TopReachesCenter(".features");
    assert!(!t.crossed(Some(401.0), VIEWPORT));
    assert!(t.crossed(Some(400.0), VIEWPORT));
    assert!(t.crossed(Some(-1200.0), VIEWPORT));
    assert!(!t.crossed(None, VIEWPORT));
    assert!(Trigger::Immediate.crossed(None, VIEWPORT));
}

#[test]
fn track_fires_once() {
    let mut track = RevealTrack::new(spec_for(".feature-card"), 3);
    assert!(!track.check_trigger(Some(700.0), VIEWPORT, 0.0));
    assert!(track.check_trigger(Some(300.0), VIEWPORT, 1.0));
    assert!(!track.check_trigger(Some(300.0), VIEWPORT, 1.1));
    assert!(!track.check_trigger(Some(900.0), VIEWPORT, 1.2));
    assert!(!track.check_trigger(Some(100.0), VIEWPORT, 5.0));
    assert_eq!(track.phase, RevealPhase::Playing { started_at: 1.0 });
}

#[test]
fn armed_track_shows_from_pose() {
    let track = RevealTrack::new(spec_for(".pricing-card"), 2);
    assert_eq!(track.pose(0, 10.0), Pose::CARD_START);
    assert_eq!(track.pose(1, 10.0), Pose::CARD_START);
}

#[test]
fn stagger_offsets_each_element() {
    let spec = spec_for(".testimonial-card");
    // element 1 starts 0.2 s after element 0
    let p0 = spec.pose_at(0, 0.2);
    let p1 = spec.pose_at(1, 0.2);
    assert!(p0.opacity > 0.0);
    assert_eq!(p1, Pose::CARD_START);
    assert!(near(spec.pose_at(1, 0.4).opacity, p0.opacity));
    assert_eq!(spec.pose_at(2, 1.3), Pose::SETTLED);
}

#[test]
fn delay_holds_from_pose() {
    let spec = spec_for(".hero-content");
    assert_eq!(spec.pose_at(0, 0.0), Pose::HIDDEN_LOW);
    assert_eq!(spec.pose_at(0, 0.5), Pose::HIDDEN_LOW);
    let mid = spec.pose_at(0, 1.0);
    assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
    assert!(mid.offset_y > 0.0 && mid.offset_y < 15.0);
    assert_eq!(spec.pose_at(0, 1.5), Pose::SETTLED);
}

#[test]
fn total_duration_counts_stagger() {
    let spec = spec_for(".feature-card");
    assert!(near(spec.total_duration(3), 0.2 * 2.0 + 0.8));
    assert!(near(spec.total_duration(1), 0.8));
    assert!(near(spec.total_duration(0), 0.8));
    assert!(near(spec_for(".mockup").total_duration(1), 1.3));
}

#[test]
fn track_finishes_after_last_element() {
    let mut track = RevealTrack::new(spec_for(".feature-card"), 3);
    track.check_trigger(Some(0.0), VIEWPORT, 2.0);
    track.advance(3.1);
    assert!(!track.is_finished());
    track.advance(3.2 + 1e-6);
    assert!(track.is_finished());
    assert_eq!(track.pose(2, 3.2), Pose::SETTLED);
}

#[test]
fn missing_trigger_never_fires() {
    let mut track = RevealTrack::new(spec_for(".pricing-card"), 4);
    for i in 0..100 {
        assert!(!track.check_trigger(None, VIEWPORT, i as f64));
    }
    assert_eq!(track.phase, RevealPhase::Armed);
    track.settle();
    assert!(track.is_idle());
    assert_eq!(track.pose(0, 0.0), Pose::SETTLED);
}

#[test]
fn empty_track_is_idle() {
    let track = RevealTrack::new(spec_for(".mockup"), 0);
    assert!(track.is_idle());
    assert!(!track.is_finished());
}

#[test]
fn ease_endpoints() {
    let ease = Ease::Power3Out;
    assert_eq!(ease.apply(0.0), 0.0);
    assert_eq!(ease.apply(1.0), 1.0);
    assert_eq!(ease.apply(-3.0), 0.0);
    assert_eq!(ease.apply(7.0), 1.0);
    assert!(near(ease.apply(0.5), 0.875));
    // ahead of a linear ramp everywhere inside the interval
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(ease.apply(t) > t);
    }
}

#[test]
fn mockup_only_fades() {
    let mockup = spec_for(".mockup");
    assert!(!mockup.animates_offset());
    for elapsed in [0.0, 0.3, 0.8, 1.3, 5.0] {
        assert_eq!(mockup.pose_at(0, elapsed).offset_y, 0.0);
    }
}

#[test]
fn sliding_entries_animate_offset() {
    for t in [
        ".hero-content",
        ".feature-card",
        ".showcase-content",
        ".testimonial-card",
        ".pricing-card",
    ] {
        assert!(spec_for(t).animates_offset(), "{}", t);
    }
}
