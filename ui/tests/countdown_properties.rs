//! Properties of the countdown decomposition over a sweep of instants around
//! the configured launch.

use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use ui::core::countdown::{countdown, CountdownSnapshot, LaunchTarget};

const TARGET: OffsetDateTime = datetime!(2025-12-01 10:00:00 +05:30);

/// Instants from 40 days before launch to 2 days after, at an irregular stride
/// so every field gets exercised.
fn sweep() -> impl Iterator<Item = OffsetDateTime> {
    let start = TARGET - Duration::days(40);
    let end = TARGET + Duration::days(2);
    std::iter::successors(Some(start), |t| Some(*t + Duration::seconds(7_919)))
        .take_while(move |t| *t <= end)
}

#[test]
fn reconstruction_identity_holds_before_launch() {
    let target = LaunchTarget::new(TARGET);
    for now in sweep().filter(|t| *t < TARGET) {
        let snap = target.snapshot_at(now);
        let expected = (TARGET - now).whole_seconds() as u64;
        assert_eq!(snap.total_seconds(), expected, "at {now}");
        assert!(snap.hours < 24 && snap.minutes < 60 && snap.seconds < 60, "at {now}");
        assert!(!snap.reached, "at {now}");
    }
}

#[test]
fn everything_is_zero_from_launch_onwards() {
    let target = LaunchTarget::new(TARGET);
    for now in sweep().filter(|t| *t >= TARGET).chain([TARGET]) {
        assert_eq!(target.snapshot_at(now), CountdownSnapshot::reached(), "at {now}");
    }
}

#[test]
fn never_increases_as_launch_approaches() {
    let target = LaunchTarget::new(TARGET);
    let totals: Vec<u64> = sweep().map(|now| target.snapshot_at(now).total_seconds()).collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn one_day_out_in_the_launch_offset() {
    let snap = countdown(
        Some(LaunchTarget::parse("2025-12-01T10:00:00+05:30").unwrap()),
        datetime!(2025-11-30 10:00:00 +05:30),
    );
    assert_eq!(
        snap,
        Some(CountdownSnapshot {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0,
            reached: false,
        })
    );
}

#[test]
fn reached_exactly_then_one_second_later() {
    let target = LaunchTarget::new(TARGET);
    let at = target.snapshot_at(TARGET);
    let after = target.snapshot_at(TARGET + Duration::seconds(1));
    assert_eq!(at, CountdownSnapshot::reached());
    assert_eq!(after, at);
}

#[test]
fn unconfigured_target_is_not_a_zero_countdown() {
    assert_eq!(countdown(None, TARGET), None);
    assert_ne!(
        countdown(Some(LaunchTarget::new(TARGET)), TARGET + Duration::days(1)),
        None
    );
}
