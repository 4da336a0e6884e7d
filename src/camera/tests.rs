//! Camera domain: tests for the follow lerp.

use bevy::math::{Vec2, Vec3};

use super::{CameraTuning, follow_step};

#[test]
fn test_follow_step_moves_partway() {
    let tuning = CameraTuning::default();
    // 5.0 * 0.1 = half the gap
    let next = follow_step(Vec3::new(0.0, 0.0, 10.0), Vec2::new(4.0, -2.0), &tuning, 0.1);
    assert!((next - Vec3::new(2.0, 0.0, 10.0)).length() < 1e-5);
}

#[test]
fn test_follow_step_clamps_large_dt() {
    let tuning = CameraTuning::default();
    let next = follow_step(Vec3::new(1.0, 1.0, 10.0), Vec2::new(4.0, 3.0), &tuning, 2.0);
    assert_eq!(next, Vec3::new(4.0, 5.0, 10.0));
}

#[test]
fn test_follow_step_keeps_depth() {
    let tuning = CameraTuning {
        smooth_speed: 1.0,
        offset: (0.0, 0.0),
    };
    let next = follow_step(Vec3::new(0.0, 0.0, 999.0), Vec2::new(8.0, 8.0), &tuning, 0.25);
    assert_eq!(next.z, 999.0);
    assert_eq!(next.x, 2.0);
}

#[test]
fn test_follow_step_zero_dt_holds_position() {
    let tuning = CameraTuning::default();
    let start = Vec3::new(3.0, -1.0, 5.0);
    assert_eq!(follow_step(start, Vec2::new(9.0, 9.0), &tuning, 0.0), start);
}
