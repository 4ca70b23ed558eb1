use briefcards::{
    add_points, compute_stats, deduct_points, level, threshold, EngineError, LevelCurve,
    UserProgress, UserStats,
};

#[test]
fn level_is_monotonic_in_points() {
    let mut prev = level(0);
    for p in 1..20_000u64 {
        let l = level(p);
        assert!(l >= prev, "level dropped from {prev} to {l} at {p} points");
        prev = l;
    }
}

#[test]
fn threshold_is_exact_inverse_at_boundaries() {
    assert_eq!(level(threshold(1)), 1);
    for n in 2..5_000u32 {
        let t = threshold(n);
        assert_eq!(level(t), n, "level(threshold({n}))");
        assert_eq!(level(t - 1), n - 1, "level(threshold({n}) - 1)");
    }
}

#[test]
fn threshold_values() {
    assert_eq!(threshold(1), 0);
    assert_eq!(threshold(2), 25);
    assert_eq!(threshold(3), 100);
    assert_eq!(threshold(4), 225);
}

#[test]
fn level_at_extreme_points_does_not_overflow() {
    assert_eq!(level(u64::MAX), 858_993_460);
}

#[test]
fn progress_percentage_stays_in_bounds() {
    for p in (0..50_000u64).step_by(7) {
        let s = compute_stats(p, level(p), 0, 0, 0).expect("stats");
        assert!(s.progress_to_next_level <= 100, "{p} points gave {}%", s.progress_to_next_level);
    }
}

#[test]
fn stats_zero_points() {
    let s = compute_stats(0, 1, 0, 0, 0).expect("stats");
    assert_eq!(s.level, 1);
    assert_eq!(s.next_level_points, 25);
    assert_eq!(s.progress_to_next_level, 0);
}

#[test]
fn stats_exactly_at_level_two() {
    assert_eq!(level(25), 2);
    let s = compute_stats(25, 2, 0, 0, 0).expect("stats");
    assert_eq!(s.next_level_points, 75);
    assert_eq!(s.progress_to_next_level, 0);
}

#[test]
fn stats_partway_through_level_two() {
    assert_eq!(level(50), 2);
    let s = compute_stats(50, 2, 3, 1, 12).expect("stats");
    assert_eq!(
        s,
        UserStats {
            completed_challenges: 3,
            earned_badges: 1,
            total_likes: 12,
            points: 50,
            level: 2,
            next_level_points: 75,
            progress_to_next_level: 33,
        }
    );
}

#[test]
fn stats_with_mismatched_level_is_clamped() {
    // 10 points but claiming level 3 => negative progress, clamped to 0.
    let low = compute_stats(10, 3, 0, 0, 0).expect("stats");
    assert_eq!(low.progress_to_next_level, 0);
    // 500 points but claiming level 1 => over 100%, clamped.
    let high = compute_stats(500, 1, 0, 0, 0).expect("stats");
    assert_eq!(high.progress_to_next_level, 100);
}

#[test]
fn stats_reject_level_zero() {
    let err = compute_stats(0, 0, 0, 0, 0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn stats_serialize_with_camel_case_keys() {
    let s = compute_stats(50, 2, 3, 1, 12).expect("stats");
    let v = serde_json::to_value(s).expect("json");
    assert_eq!(v["completedChallenges"], 3);
    assert_eq!(v["earnedBadges"], 1);
    assert_eq!(v["totalLikes"], 12);
    assert_eq!(v["nextLevelPoints"], 75);
    assert_eq!(v["progressToNextLevel"], 33);
}

#[test]
fn add_points_recomputes_level() {
    let mut p = UserProgress::from_points(10);
    assert_eq!(p.level(), 1);
    let gained = add_points(&mut p, 20).expect("award");
    assert_eq!(p.points(), 30);
    assert_eq!(p.level(), 2);
    assert_eq!(gained, 1);
}

#[test]
fn add_points_can_skip_levels() {
    let mut p = UserProgress::new();
    let gained = add_points(&mut p, 225).expect("award");
    assert_eq!(p.level(), 4);
    assert_eq!(gained, 3);
}

#[test]
fn add_points_rejects_non_positive_delta() {
    let mut p = UserProgress::from_points(40);
    for delta in [0, -1, i64::MIN] {
        let err = add_points(&mut p, delta).unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument(_)), "delta {delta}");
    }
    assert_eq!(p, UserProgress::from_points(40), "failed award must not change progress");
}

#[test]
fn add_points_rejects_overflow() {
    let mut p = UserProgress::from_points(u64::MAX - 1);
    let err = add_points(&mut p, 5).unwrap_err();
    assert!(matches!(err, EngineError::InvalidArgument(_)));
    assert_eq!(p.points(), u64::MAX - 1);
}

#[test]
fn deduct_points_rederives_level_downwards() {
    let mut p = UserProgress::from_points(110);
    assert_eq!(p.level(), 3);
    let lost = deduct_points(&mut p, 20).expect("deduct");
    assert_eq!(p.points(), 90);
    assert_eq!(p.level(), 2);
    assert_eq!(lost, 1);

    let lost = deduct_points(&mut p, 1_000).expect("deduct");
    assert_eq!(p.points(), 0);
    assert_eq!(p.level(), 1);
    assert_eq!(lost, 1);

    assert!(deduct_points(&mut p, 0).is_err());
}

#[test]
fn deserialized_progress_rederives_level() {
    let p: UserProgress = serde_json::from_str(r#"{"points":50,"level":99}"#).expect("json");
    assert_eq!(p.level(), 2);
    let round = serde_json::to_value(p).expect("json");
    assert_eq!(round["level"], 2);
}

#[test]
fn custom_curve_step() {
    let curve = LevelCurve::new(10).expect("curve");
    assert_eq!(curve.level_for(9), 1);
    assert_eq!(curve.level_for(10), 2);
    assert_eq!(curve.threshold(3), 40);
    let s = curve.compute_stats(25, curve.level_for(25), 0, 0, 0).expect("stats");
    assert_eq!(s.next_level_points, 30);
    assert_eq!(s.progress_to_next_level, 50);
}

#[test]
fn zero_step_curve_is_rejected() {
    assert!(matches!(LevelCurve::new(0), Err(EngineError::InvalidArgument(_))));
}
