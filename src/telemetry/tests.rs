use super::*;
use chrono::TimeDelta;

#[test]
fn test_angle_limit_180() {
    assert!((angle_limit_180(190.0) - -170.0).abs() < 1e-9);
    assert!((angle_limit_180(-190.0) - 170.0).abs() < 1e-9);
    assert!((angle_limit_180(720.0 + 45.0) - 45.0).abs() < 1e-9);
    assert!((angle_limit_180(180.0) - 180.0).abs() < 1e-9);
    assert!((angle_limit_180(-180.0) - 180.0).abs() < 1e-9);
    assert!((angle_limit_180(10.0 - 350.0) - 20.0).abs() < 1e-9);
}

#[test]
fn test_local_time_wraps_around_midnight() {
    let snapshot = TelemetrySnapshot {
        time: 23.0 * 3600.0,
        utc_offset: TimeDelta::hours(2),
        ..TelemetrySnapshot::default()
    };
    assert!((snapshot.local_time_of_day() - 3600.0).abs() < 1e-9);

    let west = TelemetrySnapshot {
        time: 3600.0,
        utc_offset: TimeDelta::hours(-3),
        ..TelemetrySnapshot::default()
    };
    assert!((west.local_time_of_day() - 22.0 * 3600.0).abs() < 1e-9);
}

#[test]
fn test_task_time_to_go_validity() {
    let mut snapshot = TelemetrySnapshot::default();
    assert!(!snapshot.is_valid_task_time_to_go());
    snapshot.task_time_to_go = 1200.0;
    assert!(snapshot.is_valid_task_time_to_go());
    snapshot.task_time_to_go = 0.95e6;
    assert!(!snapshot.is_valid_task_time_to_go());
}

#[test]
fn test_terrain_warning_origin_means_clear() {
    let mut snapshot = TelemetrySnapshot::default();
    assert!(!snapshot.has_terrain_warning());
    snapshot.terrain_warning = GeoPoint::new(0.0, 7.5);
    assert!(snapshot.has_terrain_warning());
}

#[test]
fn test_start_rules_reject_bad_values() {
    assert_eq!(
        StartRules::new(-1.0, (0.0, 0.0), (0.0, 0.0), StartHeightRef::AboveGround),
        Err(StartRulesError::NegativeValue)
    );
    assert_eq!(
        StartRules::new(3000.0, (f64::NAN, 0.0), (0.0, 0.0), StartHeightRef::AboveGround),
        Err(StartRulesError::NonFiniteValue)
    );
}

#[test]
fn test_start_rules_limits_and_margins() {
    let rules =
        StartRules::new(3000.0, (40.0, 5.0), (1000.0, 100.0), StartHeightRef::AboveSeaLevel)
            .unwrap();
    assert!(rules.speed_ok(40.0, false));
    assert!(!rules.speed_ok(42.0, false));
    assert!(rules.speed_ok(42.0, true));
    assert!(!rules.speed_ok(46.0, true));
    assert!(rules.height_ok(Some(1050.0), true));
    assert!(!rules.height_ok(Some(1050.0), false));
    assert!(rules.height_ok(None, false));

    let unlimited = StartRules::default();
    assert!(unlimited.speed_ok(500.0, false));
    assert!(unlimited.height_ok(Some(9000.0), false));
}

#[test]
fn test_start_inputs_follow_available_sensors() {
    let mut snapshot = TelemetrySnapshot {
        ground_speed: 30.0,
        nav_altitude: 1200.0,
        altitude_agl: Some(700.0),
        ..TelemetrySnapshot::default()
    };
    assert!((snapshot.start_speed() - 30.0).abs() < 1e-9);
    snapshot.indicated_airspeed = Some(33.0);
    assert!((snapshot.start_speed() - 33.0).abs() < 1e-9);
    assert_eq!(snapshot.start_height(StartHeightRef::AboveGround), Some(700.0));
    assert_eq!(snapshot.start_height(StartHeightRef::AboveSeaLevel), Some(1200.0));
}

#[test]
fn test_task_point_validity() {
    let mut task = TaskState {
        points: vec![TaskPoint::new(46.0, 8.0), TaskPoint::new(46.5, 8.5)],
        ..TaskState::default()
    };
    assert!(task.has_active_point());
    assert!(task.has_next_point());
    assert!(task.on_first_leg());
    task.active = 1;
    assert!(!task.has_next_point());
    assert!(!task.on_first_leg());
    task.active = 2;
    assert!(task.active_point().is_none());
    assert_eq!(TaskType::from("AAT"), TaskType::Aat);
    assert_eq!(TaskType::from("unknown"), TaskType::Racing);
    assert_eq!(StartHeightRef::from("MSL"), StartHeightRef::AboveSeaLevel);
    assert_eq!(StartHeightRef::from("agl"), StartHeightRef::AboveGround);
}
