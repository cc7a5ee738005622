use std::io::Write;
use std::time::Duration;

use salah_tracker::config::DashboardConfig;
use salah_tracker::error::SalahError;
use salah_tracker::types::{Coordinate, Prayer};

// ── Defaults ──

#[test]
fn test_default_config() {
    let c = DashboardConfig::default();
    assert_eq!(c.tick_interval(), Duration::from_secs(1));
    assert_eq!(c.fallback_place.coordinate, Coordinate::new(21.4225, 39.8262).unwrap());
    assert_eq!(c.located_label.city, "الرياض");
    assert_eq!(c.prayer_times, ["05:30", "12:15", "15:45", "18:20", "19:50"]);
    assert_eq!(c.hijri_adjustment_days, 0);
    assert!(c.validate().is_ok());
}

// ── JSON ──

#[test]
fn test_partial_json_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "tickIntervalMs": 250, "prayerTimes": ["04:50", "12:05", "15:30", "18:10", "19:40"] }}"#
    )
    .unwrap();

    let c = DashboardConfig::try_from_json(file.path().to_str().unwrap()).unwrap();
    assert_eq!(c.tick_interval_ms, 250);
    assert_eq!(c.hijri_adjustment_days, 0);
    let table = c.prayer_table().unwrap();
    assert_eq!(table.get(Prayer::Fajr).unwrap().time.to_string(), "04:50");
}

#[test]
fn test_json_with_fallback_place() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "fallbackPlace": {{ "city": "Medina", "country": "KSA",
              "coordinate": {{ "latitude": 24.4672, "longitude": 39.6111 }} }} }}"#
    )
    .unwrap();
    let c = DashboardConfig::try_from_json(file.path().to_str().unwrap()).unwrap();
    assert_eq!(c.fallback_place.label(), "Medina, KSA");
}

#[test]
fn test_json_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tickIntervalMs": 0 }}"#).unwrap();
    let result = DashboardConfig::try_from_json(file.path().to_str().unwrap());
    assert!(matches!(result, Err(SalahError::Config(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "fallbackPlace": {{ "city": "x", "country": "y",
              "coordinate": {{ "latitude": 95.0, "longitude": 0.0 }} }} }}"#
    )
    .unwrap();
    let result = DashboardConfig::try_from_json(file.path().to_str().unwrap());
    assert!(matches!(result, Err(SalahError::InvalidCoordinate { .. })));
}

#[test]
fn test_json_rejects_hijri_adjustment_out_of_bounds() {
    for days in ["1000000000", "-31", "31"] {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "hijriAdjustmentDays": {} }}"#, days).unwrap();
        let result = DashboardConfig::try_from_json(file.path().to_str().unwrap());
        assert!(matches!(result, Err(SalahError::Config(_))), "accepted {}", days);
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "hijriAdjustmentDays": -30 }}"#).unwrap();
    let c = DashboardConfig::try_from_json(file.path().to_str().unwrap()).unwrap();
    assert_eq!(c.hijri_adjustment_days, -30);
}

#[test]
fn test_json_malformed_and_missing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let result = DashboardConfig::try_from_json(file.path().to_str().unwrap());
    assert!(matches!(result, Err(SalahError::Json(_))));

    let result = DashboardConfig::try_from_json("/nonexistent/salah.json");
    assert!(matches!(result, Err(SalahError::Io(_))));
}
