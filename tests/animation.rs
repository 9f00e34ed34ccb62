use std::time::{Duration, Instant};

use modalhost::animation::lerp;
use modalhost::{Animatable, AnimationSpec, Easing, DEFAULT_ANIM_DURATION};

// =============================================================================
// Easing Tests
// =============================================================================

#[test]
fn test_easing_fixed_at_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=20 {
            let value = easing.apply(i as f32 / 20.0);
            assert!(value >= prev, "{easing:?} not monotonic at step {i}");
            prev = value;
        }
    }
}

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

// =============================================================================
// AnimationSpec Tests
// =============================================================================

#[test]
fn test_animation_spec_default_is_300ms_tween() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration, Duration::from_millis(300));
    assert_eq!(spec.duration, DEFAULT_ANIM_DURATION);
    assert_eq!(spec.easing, Easing::EaseInOut);
}

#[test]
fn test_animation_spec_new() {
    let spec = AnimationSpec::new(Duration::from_millis(150), Easing::EaseOut);
    assert_eq!(spec.duration, Duration::from_millis(150));
    assert_eq!(spec.easing, Easing::EaseOut);
}

// =============================================================================
// Animatable Tests
// =============================================================================

#[test]
fn test_animatable_initial_value() {
    let anim = Animatable::new(0.25);
    assert_eq!(anim.value(), 0.25);
    assert!(!anim.is_animating());
}

#[test]
fn test_snap_to_is_immediate() {
    let mut anim = Animatable::new(0.0);
    anim.snap_to(1.0);
    assert_eq!(anim.value(), 1.0);
    assert!(!anim.is_animating());
}

#[test]
fn test_snap_to_cancels_in_flight_animation() {
    let mut anim = Animatable::new(0.0);
    anim.animate_to(1.0, AnimationSpec::new(Duration::from_secs(60), Easing::Linear));
    anim.snap_to(0.5);

    assert!(!anim.is_animating());
    // Value stays put well past where the cancelled run would have moved it.
    assert_eq!(anim.value_at(Instant::now() + Duration::from_secs(120)), 0.5);
}

#[test]
fn test_animate_to_settles_exactly_at_target() {
    let mut anim = Animatable::new(0.3);
    anim.animate_to(1.0, AnimationSpec::default());

    let settled = anim.value_at(Instant::now() + Duration::from_secs(1));
    assert_eq!(settled, 1.0);
}

#[test]
fn test_animate_to_reports_in_flight() {
    let mut anim = Animatable::new(0.0);
    anim.animate_to(1.0, AnimationSpec::new(Duration::from_secs(60), Easing::Linear));

    assert!(anim.is_animating());
    assert_eq!(anim.target(), 1.0);
    let mid = anim.value();
    assert!((0.0..1.0).contains(&mid));
}

#[test]
fn test_last_caller_wins() {
    let mut anim = Animatable::new(1.0);
    anim.animate_to(0.0, AnimationSpec::default());
    anim.animate_to(1.0, AnimationSpec::default());

    assert_eq!(anim.target(), 1.0);
    // No residue from the superseded run.
    assert_eq!(anim.value_at(Instant::now() + Duration::from_secs(1)), 1.0);
}

#[test]
fn test_zero_duration_completes_immediately() {
    let mut anim = Animatable::new(0.0);
    anim.animate_to(1.0, AnimationSpec::new(Duration::ZERO, Easing::Linear));

    assert_eq!(anim.value(), 1.0);
    assert!(!anim.is_animating());
}

#[test]
fn test_tick_commits_completed_run() {
    let mut anim = Animatable::new(0.0);
    anim.animate_to(1.0, AnimationSpec::default());

    let later = Instant::now() + Duration::from_secs(1);
    anim.tick(later);

    assert!(!anim.is_animating_at(later));
    assert_eq!(anim.value_at(later), 1.0);
}

#[test]
fn test_tick_leaves_in_flight_run_alone() {
    let mut anim = Animatable::new(0.0);
    anim.animate_to(1.0, AnimationSpec::new(Duration::from_secs(60), Easing::Linear));

    let now = Instant::now();
    anim.tick(now);
    assert!(anim.is_animating_at(now));
}

// =============================================================================
// lerp Tests
// =============================================================================

#[test]
fn test_lerp() {
    assert_eq!(lerp(0.0, 1.0, 0.0), 0.0);
    assert_eq!(lerp(0.0, 1.0, 1.0), 1.0);
    assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
    assert!((lerp(1.0, 0.95, 0.5) - 0.975).abs() < 1e-6);
}
