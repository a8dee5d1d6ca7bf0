// Host-side tests for shockwave lifecycle: triggering, aging, expiry and eviction.

use glam::Vec2;
use shockwave_core::*;

fn trigger_at(reg: &mut ShockwaveRegistry, x: f32, duration_ms: f32, speed: f32) {
    reg.trigger(Vec2::new(x, 0.5), duration_ms, speed, 0.5, 0.05);
}

fn centers_x(reg: &ShockwaveRegistry) -> Vec<f32> {
    reg.live_instances().iter().map(|s| s.center.x).collect()
}

#[test]
fn overflow_keeps_most_recent_k_in_insertion_order() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..27 {
        trigger_at(&mut reg, i as f32 / 100.0, 1000.0, 50.0);
    }
    assert_eq!(reg.len(), MAX_SHOCKWAVES);
    let expected: Vec<f32> = (7..27).map(|i| i as f32 / 100.0).collect();
    assert_eq!(centers_x(&reg), expected);
}

#[test]
fn twenty_five_triggers_drop_the_first_five() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..25 {
        trigger_at(&mut reg, i as f32 / 25.0, 1000.0, 50.0);
    }
    let live = centers_x(&reg);
    assert_eq!(live.len(), 20);
    for i in 0..5 {
        assert!(!live.contains(&(i as f32 / 25.0)), "wave {i} should be evicted");
    }
    for i in 5..25 {
        assert!(live.contains(&(i as f32 / 25.0)), "wave {i} should be live");
    }
}

#[test]
fn overflow_survives_an_advance() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..30 {
        trigger_at(&mut reg, i as f32 / 100.0, 1000.0, 10.0);
    }
    reg.advance(16.0);
    assert_eq!(reg.len(), 20);
    assert_eq!(reg.live_instances()[0].center.x, 0.10);
}

#[test]
fn explicit_capacity_trim_drops_oldest_first() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..6 {
        trigger_at(&mut reg, i as f32, 1000.0, 50.0);
    }
    reg.enforce_capacity(4);
    assert_eq!(centers_x(&reg), vec![2.0, 3.0, 4.0, 5.0]);
    reg.enforce_capacity(10);
    assert_eq!(reg.len(), 4);
}

#[test]
fn reference_wave_lives_twenty_frames_and_expires_on_the_twenty_first() {
    let mut reg = ShockwaveRegistry::new();
    reg.trigger(Vec2::new(0.5, 0.5), 1000.0, 50.0, 0.5, 0.05);
    for _ in 0..20 {
        reg.advance(16.7);
    }
    assert_eq!(reg.len(), 1);
    let age = reg.live_instances()[0].age();
    assert!((age - 1.0).abs() < 1e-6, "age after 20 frames was {age}");

    reg.advance(16.7);
    assert!(reg.is_empty());
}

#[test]
fn age_exactly_one_is_retained() {
    let mut reg = ShockwaveRegistry::new();
    // rate 0.25 is exact in binary: ages 0.25, 0.5, 0.75, 1.0
    trigger_at(&mut reg, 0.5, 4.0, 1.0);
    for _ in 0..4 {
        reg.advance(0.0);
    }
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.live_instances()[0].age(), 1.0);
    reg.advance(0.0);
    assert!(reg.is_empty());
}

#[test]
fn age_just_past_one_is_removed() {
    let mut reg = ShockwaveRegistry::new();
    // rate slightly above 0.25: the fourth advance lands on 1 + epsilon
    trigger_at(&mut reg, 0.5, 4.0, 1.000_004);
    for _ in 0..3 {
        reg.advance(0.0);
    }
    assert_eq!(reg.len(), 1);
    reg.advance(0.0);
    assert!(reg.is_empty());
}

#[test]
fn non_integral_lifetime_expires_after_ceil_of_inverse_rate() {
    let mut reg = ShockwaveRegistry::new();
    // rate 0.3 -> ceil(1 / 0.3) = 4 calls
    trigger_at(&mut reg, 0.5, 1.0, 0.3);
    let mut calls = 0;
    while !reg.is_empty() {
        reg.advance(16.0);
        calls += 1;
        assert!(calls <= 10, "wave never expired");
    }
    assert_eq!(calls, 4);
}

#[test]
fn age_is_monotonic_while_alive() {
    let mut reg = ShockwaveRegistry::new();
    trigger_at(&mut reg, 0.5, 1500.0, 70.0);
    let mut prev = 0.0;
    while let Some(s) = reg.live_instances().first().copied() {
        assert!(s.age() >= prev);
        assert!(s.age() <= 1.0);
        prev = s.age();
        reg.advance(16.0);
    }
}

#[test]
fn zero_duration_is_never_live() {
    let mut reg = ShockwaveRegistry::new();
    reg.trigger(Vec2::new(0.3, 0.3), 0.0, 50.0, 0.5, 0.05);
    assert!(reg.live_instances().is_empty());
    reg.advance(16.0);
    assert!(reg.live_instances().is_empty());
}

#[test]
fn zero_duration_does_not_evict_live_waves() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..20 {
        trigger_at(&mut reg, i as f32, 1000.0, 10.0);
    }
    reg.trigger(Vec2::new(0.3, 0.3), 0.0, 50.0, 0.5, 0.05);
    assert_eq!(reg.len(), 20);
    assert_eq!(reg.live_instances()[0].center.x, 0.0);
}

#[test]
fn overflowing_rate_starts_at_zero_age_and_is_never_live() {
    let req = TriggerRequest {
        location: Vec2::new(0.5, 0.5),
        duration_ms: 1e-39,
        speed: 50.0,
        max_radius: 0.5,
        thickness: 0.05,
    };
    let instance = ShockwaveInstance::new(req);
    assert!(instance.rate().is_infinite());
    assert_eq!(instance.age(), 0.0);
    assert!(instance.is_expired());

    let mut reg = ShockwaveRegistry::new();
    reg.trigger_request(req);
    assert!(reg.live_instances().is_empty());
}

#[test]
fn nan_duration_does_not_hold_a_slot() {
    let mut reg = ShockwaveRegistry::new();
    trigger_at(&mut reg, 0.1, 1000.0, 50.0);
    reg.trigger(Vec2::new(0.3, 0.3), f32::NAN, 50.0, 0.5, 0.05);
    reg.trigger(Vec2::new(0.3, 0.3), 1000.0, f32::NAN, 0.5, 0.05);
    assert_eq!(centers_x(&reg), vec![0.1]);
    for _ in 0..25 {
        reg.advance(16.0);
    }
    assert!(reg.is_empty());
}

#[test]
fn advance_on_empty_registry_is_a_no_op() {
    let mut reg = ShockwaveRegistry::new();
    reg.advance(16.0);
    reg.advance(0.0);
    assert!(reg.is_empty());
}

#[test]
fn elapsed_time_does_not_change_aging() {
    let mut slow = ShockwaveRegistry::new();
    let mut fast = ShockwaveRegistry::new();
    trigger_at(&mut slow, 0.5, 1000.0, 50.0);
    trigger_at(&mut fast, 0.5, 1000.0, 50.0);
    for _ in 0..7 {
        slow.advance(100.0);
        fast.advance(1.0);
    }
    assert_eq!(slow.live_instances(), fast.live_instances());
}

#[test]
fn degenerate_shapes_are_accepted() {
    let mut reg = ShockwaveRegistry::new();
    reg.trigger(Vec2::new(0.5, 0.5), 1000.0, 50.0, -0.5, 0.0);
    assert_eq!(reg.len(), 1);
    reg.advance(16.0);
    assert_eq!(reg.len(), 1);
}

#[test]
fn live_snapshot_is_restartable() {
    let mut reg = ShockwaveRegistry::new();
    for i in 0..3 {
        trigger_at(&mut reg, i as f32, 1000.0, 50.0);
    }
    let first: Vec<_> = reg.live_instances().iter().map(|s| s.center).collect();
    let second: Vec<_> = reg.live_instances().iter().map(|s| s.center).collect();
    assert_eq!(first, second);
    assert_eq!(reg.len(), 3);
}

#[test]
fn clear_drops_everything() {
    let mut reg = ShockwaveRegistry::new();
    trigger_at(&mut reg, 0.1, 1000.0, 50.0);
    reg.clear();
    assert!(reg.is_empty());
}
