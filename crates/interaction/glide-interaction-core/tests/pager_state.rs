use glide_interaction_core::{
    ease::EaseCurve,
    pager::{PagerPhase, SectionPager},
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should walk Idle -> Transitioning -> Idle over exactly one cooldown
#[test]
fn transition_window_lifecycle() {
    let mut pager = SectionPager::new(5, 0.8, EaseCurve::LINEAR);
    assert_eq!(pager.phase(), PagerPhase::Idle);

    let step = pager.on_wheel(1.0).expect("idle pager accepts wheel");
    assert_eq!((step.from, step.to), (0, 1));
    assert_eq!(pager.index(), 1);
    assert!(pager.is_transitioning());

    // Partial ticks keep the window open.
    assert_eq!(pager.tick(0.3), None);
    assert_eq!(pager.tick(0.3), None);
    assert!(pager.is_transitioning());

    // The remainder closes it and reports the settled index.
    assert_eq!(pager.tick(0.3), Some(1));
    assert_eq!(pager.phase(), PagerPhase::Idle);
}

/// it should clear the window unconditionally, regardless of input seen meanwhile
#[test]
fn window_clears_despite_input() {
    let mut pager = SectionPager::new(5, 0.8, EaseCurve::LINEAR);
    pager.jump_to(4).unwrap();
    for _ in 0..10 {
        assert!(pager.on_wheel(1.0).is_none());
        assert!(pager.on_wheel(-1.0).is_none());
        assert!(pager.jump_to(2).is_none());
    }
    assert_eq!(pager.tick(0.8), Some(4));
    assert_eq!(pager.index(), 4);
    // Fresh input is honored again after settling.
    assert!(pager.jump_to(2).is_some());
}

/// it should keep 0 <= index < count across arbitrary input
#[test]
fn index_stays_in_range() {
    let mut pager = SectionPager::new(3, 0.1, EaseCurve::LINEAR);
    let deltas = [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0];
    for d in deltas {
        pager.on_wheel(d);
        pager.tick(0.2);
        assert!(pager.index() < 3);
    }
}

/// it should ignore a zero wheel delta
#[test]
fn zero_delta_is_noop() {
    let mut pager = SectionPager::new(3, 0.8, EaseCurve::LINEAR);
    assert!(pager.on_wheel(0.0).is_none());
    assert!(!pager.is_transitioning());
}

/// it should never move a single-section pager
#[test]
fn single_section_never_moves() {
    let mut pager = SectionPager::new(1, 0.8, EaseCurve::LINEAR);
    assert!(pager.on_wheel(1.0).is_none());
    assert!(pager.on_wheel(-1.0).is_none());
    assert!(pager.jump_to(0).is_none());
    assert_eq!(pager.index(), 0);
    assert!(!pager.is_transitioning());
}

/// it should report eased progress from 0 to 1 across the window
#[test]
fn progress_runs_zero_to_one() {
    let mut pager = SectionPager::new(2, 1.0, EaseCurve::LINEAR);
    approx(pager.progress(), 1.0, 1e-6); // idle
    pager.on_wheel(1.0);
    approx(pager.progress(), 0.0, 1e-6);
    pager.tick(0.25);
    approx(pager.progress(), 0.25, 1e-5);
    pager.tick(0.5);
    approx(pager.progress(), 0.75, 1e-5);
    pager.tick(0.25);
    approx(pager.progress(), 1.0, 1e-6); // settled
}

/// it should keep eased progress monotonic for the default curve
#[test]
fn eased_progress_is_monotonic() {
    let mut pager = SectionPager::new(2, 0.8, EaseCurve::EASE);
    pager.on_wheel(1.0);
    let mut prev = pager.progress();
    for _ in 0..48 {
        pager.tick(0.8 / 48.0);
        let p = pager.progress();
        assert!(p >= prev - 1e-4, "progress regressed: {p} < {prev}");
        prev = p;
    }
    approx(prev, 1.0, 1e-4);
}

/// it should settle immediately with a zero cooldown
#[test]
fn zero_cooldown_settles_next_tick() {
    let mut pager = SectionPager::new(3, 0.0, EaseCurve::LINEAR);
    pager.on_wheel(1.0);
    assert!(pager.is_transitioning());
    assert_eq!(pager.tick(0.0), Some(1));
    assert!(pager.on_wheel(1.0).is_some());
}
