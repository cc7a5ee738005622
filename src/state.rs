use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::bearing::qibla_degrees;
use crate::carousel::Carousel;
use crate::content::{AHADITH, DUAS};
use crate::hijri::{format_gregorian, format_hijri, to_hijri};
use crate::location::Resolution;
use crate::schedule::{time_of_day, PrayerTable};
use crate::types::{DashboardView, NextPrayer, Place};

/// Display state owned by the top-level view. Every field changes only
/// through the update methods below, each returning the new state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub now: NaiveDateTime,
    pub place: Option<Place>,
    pub prayer_table: Option<PrayerTable>,
    pub hadith: Carousel,
    pub dua: Carousel,
    pub hijri_adjustment_days: i64,
    table_on_resolve: PrayerTable,
}

impl DashboardState {
    /// State before the position query has completed: no place and no
    /// timetable yet.
    pub fn new(now: NaiveDateTime, prayer_table: PrayerTable, hijri_adjustment_days: i64) -> Self {
        Self {
            now,
            place: None,
            prayer_table: None,
            hadith: Carousel::new(AHADITH.len()),
            dua: Carousel::new(DUAS.len()),
            hijri_adjustment_days,
            table_on_resolve: prayer_table,
        }
    }

    pub fn tick(self, now: NaiveDateTime) -> Self {
        Self { now, ..self }
    }

    /// Installs the resolved place and the timetable. Both outcomes of the
    /// position query populate the page.
    pub fn apply_location(self, resolution: Resolution) -> Self {
        if resolution.is_fallback() {
            debug!("showing fallback place");
        }
        let table = self.table_on_resolve.clone();
        Self {
            place: Some(resolution.into_place()),
            prayer_table: Some(table),
            ..self
        }
    }

    pub fn next_hadith(self) -> Self {
        Self {
            hadith: self.hadith.next(),
            ..self
        }
    }

    pub fn previous_hadith(self) -> Self {
        Self {
            hadith: self.hadith.previous(),
            ..self
        }
    }

    pub fn next_dua(self) -> Self {
        Self {
            dua: self.dua.next(),
            ..self
        }
    }

    pub fn previous_dua(self) -> Self {
        Self {
            dua: self.dua.previous(),
            ..self
        }
    }

    pub fn next_prayer(&self) -> Option<NextPrayer> {
        self.prayer_table
            .as_ref()
            .map(|table| table.next_prayer(time_of_day(&self.now)))
    }

    pub fn qibla_degrees(&self) -> Option<u32> {
        self.place.as_ref().map(|p| qibla_degrees(p.coordinate))
    }

    pub fn hijri_date(&self) -> Option<String> {
        match to_hijri(self.now.date(), self.hijri_adjustment_days) {
            Ok(readout) => Some(format_hijri(&readout)),
            Err(e) => {
                warn!(error = %e, "hijri date unavailable");
                None
            }
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            clock: self.now.format("%H:%M:%S").to_string(),
            gregorian_date: format_gregorian(self.now.date()),
            place: self.place.clone(),
            prayers: self
                .prayer_table
                .as_ref()
                .map(|t| t.events().to_vec())
                .unwrap_or_default(),
            next_prayer: self.next_prayer(),
            qibla_degrees: self.qibla_degrees(),
            hadith: AHADITH[self.hadith.index()],
            dua: DUAS[self.dua.index()],
            hijri_date: self.hijri_date(),
        }
    }
}
