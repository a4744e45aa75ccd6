//! Locomotion Tests
//!
//! Tests for:
//! - Per-frame forward/backward steps along the facing direction
//! - Turning about +Y
//! - World boundary clamping

mod common;

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use strider::app::input::MovementKeys;
use strider::character::LocomotionIntegrator;
use strider::scene::transform::Transform;
use strider::settings::LocomotionSettings;

use common::{approx, approx_vec3};

fn held(forward: bool, backward: bool, turn_left: bool, turn_right: bool) -> MovementKeys {
    MovementKeys {
        forward,
        backward,
        turn_left,
        turn_right,
    }
}

#[test]
fn ten_forward_frames_cover_one_unit() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();

    for _ in 0..10 {
        integrator.integrate(&mut transform, held(true, false, false, false));
    }

    assert!(approx_vec3(transform.position, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn backward_moves_against_facing() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();
    transform.set_yaw(FRAC_PI_2);

    integrator.integrate(&mut transform, held(false, true, false, false));
    assert!(approx_vec3(transform.position, Vec3::new(-0.1, 0.0, 0.0)));
}

#[test]
fn forward_and_backward_cancel() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();

    integrator.integrate(&mut transform, held(true, true, false, false));
    assert!(approx_vec3(transform.position, Vec3::ZERO));
}

#[test]
fn turning_changes_yaw_only() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();

    integrator.integrate(&mut transform, held(false, false, true, false));
    assert!(approx(transform.yaw(), 0.05));
    assert!(approx_vec3(transform.position, Vec3::ZERO));

    integrator.integrate(&mut transform, held(false, false, false, true));
    integrator.integrate(&mut transform, held(false, false, false, true));
    assert!(approx(transform.yaw(), -0.05));
}

#[test]
fn opposite_turns_cancel() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();

    integrator.integrate(&mut transform, held(false, false, true, true));
    assert!(approx(transform.yaw(), 0.0));
}

#[test]
fn step_uses_heading_from_before_the_turn() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::new();

    integrator.integrate(&mut transform, held(true, false, true, false));
    assert!(approx_vec3(transform.position, Vec3::new(0.0, 0.0, 0.1)));
    assert!(approx(transform.yaw(), 0.05));
}

#[test]
fn boundary_clamps_overshoot() {
    let integrator = LocomotionIntegrator::default();
    let mut transform = Transform::from_translation(Vec3::new(49.95, 0.0, 0.0));
    transform.set_yaw(FRAC_PI_2);

    integrator.integrate(&mut transform, held(true, false, false, false));
    assert_eq!(transform.position.x, 50.0);
}

#[test]
fn position_never_leaves_the_world() {
    let integrator = LocomotionIntegrator::new(LocomotionSettings {
        move_speed: 0.7,
        ..LocomotionSettings::default()
    });
    let mut transform = Transform::new();
    transform.set_yaw(0.6);

    for frame in 0..2_000 {
        let keys = held(true, false, frame % 7 == 0, frame % 11 == 0);
        integrator.integrate(&mut transform, keys);
        assert!(transform.position.x.abs() <= 50.0);
        assert!(transform.position.z.abs() <= 50.0);
        assert!(approx(transform.position.y, 0.0));
    }
}
