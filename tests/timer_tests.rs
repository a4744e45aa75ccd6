//! Frame Timer Tests

use std::thread;
use std::time::Duration;

use strider::utils::Timer;

#[test]
fn tick_measures_time_since_previous_tick() {
    let mut timer = Timer::new();
    thread::sleep(Duration::from_millis(5));

    let dt = timer.tick();
    assert!(dt >= 0.005, "dt = {dt}");
    assert_eq!(timer.frames(), 1);
    assert!(timer.since_start() >= timer.frame_delta());

    let second = timer.tick();
    assert!(second < dt + 1.0);
    assert_eq!(timer.frames(), 2);
}

#[test]
fn fresh_timer_has_no_frames() {
    let timer = Timer::default();
    assert_eq!(timer.frames(), 0);
    assert_eq!(timer.frame_delta(), Duration::ZERO);
}
