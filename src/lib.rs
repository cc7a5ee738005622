pub mod bearing;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod hijri;
pub mod location;
pub mod schedule;
pub mod state;
pub mod ticker;
pub mod types;

pub use bearing::{
    deg_to_rad, initial_bearing, normalize_angle, qibla_bearing, qibla_degrees, rad_to_deg,
    CompassPoint, KAABA,
};

pub use carousel::Carousel;

pub use clock::{Clock, FixedClock, SystemClock};

pub use config::{DashboardConfig, PlaceLabel, MAX_HIJRI_ADJUSTMENT_DAYS};

pub use error::{LocationError, SalahError};

pub use hijri::{format_gregorian, format_hijri, hijri_month_name, to_hijri};

pub use location::{fallback_place, resolve_location, LocationProvider, Resolution, StaticLocation};

pub use schedule::{
    minutes_until, next_event, time_of_day, zoned_time_of_day, PrayerTable, DEFAULT_PRAYER_TIMES,
    MINUTES_PER_DAY,
};

pub use state::DashboardState;

pub use ticker::{Ticker, DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL};

pub use types::{
    Coordinate, DailyEvent, DashboardView, Dua, Hadith, HijriReadout, NextPrayer, Place, Prayer,
    TimeOfDay,
};
