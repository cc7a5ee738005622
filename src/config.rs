use std::env;
use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SalahError;
use crate::location::fallback_place;
use crate::schedule::{PrayerTable, DEFAULT_PRAYER_TIMES};
use crate::types::{Coordinate, Place};

pub const MAX_HIJRI_ADJUSTMENT_DAYS: i64 = 30;

/// City/country shown when the position query succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLabel {
    pub city: String,
    pub country: String,
}

impl Default for PlaceLabel {
    fn default() -> Self {
        Self {
            city: "الرياض".to_string(),
            country: "السعودية".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    /// Refresh period of the header clock and next-prayer line.
    pub tick_interval_ms: u64,
    pub fallback_place: Place,
    pub located_label: PlaceLabel,
    /// Fajr, Dhuhr, Asr, Maghrib, Isha as `HH:MM`.
    pub prayer_times: Vec<String>,
    /// Day offset applied before Hijri conversion (positive = Hijri ahead).
    pub hijri_adjustment_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            fallback_place: fallback_place(),
            located_label: PlaceLabel::default(),
            prayer_times: DEFAULT_PRAYER_TIMES.iter().map(|t| t.to_string()).collect(),
            hijri_adjustment_days: 0,
        }
    }
}

impl DashboardConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn prayer_table(&self) -> Result<PrayerTable, SalahError> {
        PrayerTable::from_strings(&self.prayer_times)
    }

    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SalahError> {
        if self.tick_interval_ms == 0 {
            return Err(SalahError::Config("tickIntervalMs must be positive".to_string()));
        }
        if self.hijri_adjustment_days.abs() > MAX_HIJRI_ADJUSTMENT_DAYS {
            return Err(SalahError::Config(format!(
                "hijriAdjustmentDays must be within ±{}, got {}",
                MAX_HIJRI_ADJUSTMENT_DAYS, self.hijri_adjustment_days
            )));
        }
        let c = self.fallback_place.coordinate;
        Coordinate::new(c.latitude, c.longitude)?;
        self.prayer_table()?;
        Ok(())
    }

    /// Reads a JSON file; missing fields keep their defaults.
    #[instrument]
    pub fn try_from_json(path: &str) -> Result<Self, SalahError> {
        debug!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)?;
        let config: DashboardConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `SALAH_TICK_INTERVAL_MS`, `SALAH_HIJRI_ADJUSTMENT` and
    /// `SALAH_PRAYER_TIMES` (comma-separated `HH:MM`) on top of `self`.
    #[instrument(skip(self))]
    pub fn with_env(self) -> Result<Self, SalahError> {
        self.with_vars(|key| env::var(key).ok())
    }

    pub fn from_env() -> Result<Self, SalahError> {
        Self::default().with_env()
    }

    fn with_vars<F>(mut self, lookup: F) -> Result<Self, SalahError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SALAH_TICK_INTERVAL_MS") {
            self.tick_interval_ms = raw.trim().parse().map_err(|_| {
                SalahError::Config(format!("SALAH_TICK_INTERVAL_MS is not a number: {}", raw))
            })?;
            debug!(tick_interval_ms = self.tick_interval_ms, "override from environment");
        }
        if let Some(raw) = lookup("SALAH_HIJRI_ADJUSTMENT") {
            self.hijri_adjustment_days = raw.trim().parse().map_err(|_| {
                SalahError::Config(format!("SALAH_HIJRI_ADJUSTMENT is not a number: {}", raw))
            })?;
            debug!(hijri_adjustment_days = self.hijri_adjustment_days, "override from environment");
        }
        if let Some(raw) = lookup("SALAH_PRAYER_TIMES") {
            self.prayer_times = raw.split(',').map(|t| t.trim().to_string()).collect();
            debug!(prayer_times = ?self.prayer_times, "override from environment");
        }
        self.validate()?;
        Ok(self)
    }
}
