use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SalahError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Rejects latitudes outside [-90, 90] and longitudes outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SalahError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(SalahError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, SalahError> {
        if hour > 23 || minute > 59 {
            return Err(SalahError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Parses the `HH:MM` form used by the prayer table.
    pub fn parse(s: &str) -> Result<Self, SalahError> {
        let invalid = || SalahError::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = h.parse::<u32>().map_err(|_| invalid())?;
        let minute = m.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        (self.hour * 60 + self.minute) as i32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn english_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEvent {
    pub prayer: Prayer,
    pub time: TimeOfDay,
}

impl DailyEvent {
    pub fn name(&self) -> &'static str {
        self.prayer.arabic_name()
    }
}

/// A resolved observer position with the label shown in the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub country: String,
    pub coordinate: Coordinate,
}

impl Place {
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hadith {
    pub text: &'static str,
    pub narrator: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dua {
    pub arabic: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub event: DailyEvent,
    pub minutes_remaining: i32,
    pub tomorrow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriReadout {
    pub year: usize,
    pub month: usize,
    pub day: usize,
}

/// Everything the page renders for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub clock: String,
    pub gregorian_date: String,
    pub place: Option<Place>,
    pub prayers: Vec<DailyEvent>,
    pub next_prayer: Option<NextPrayer>,
    pub qibla_degrees: Option<u32>,
    pub hadith: Hadith,
    pub dua: Dua,
    pub hijri_date: Option<String>,
}
