use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

use crate::error::SalahError;
use crate::types::{DailyEvent, NextPrayer, Prayer, TimeOfDay};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Times shown until a real prayer-time source exists.
pub const DEFAULT_PRAYER_TIMES: [TimeOfDay; 5] = [
    TimeOfDay { hour: 5, minute: 30 },
    TimeOfDay { hour: 12, minute: 15 },
    TimeOfDay { hour: 15, minute: 45 },
    TimeOfDay { hour: 18, minute: 20 },
    TimeOfDay { hour: 19, minute: 50 },
];

pub fn time_of_day(dt: &NaiveDateTime) -> TimeOfDay {
    TimeOfDay {
        hour: dt.hour(),
        minute: dt.minute(),
    }
}

/// Wall-clock time of day in the instant's own zone.
pub fn zoned_time_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> TimeOfDay {
    time_of_day(&dt.naive_local())
}

/// First event strictly after `now`, or the first event of the day when all
/// have passed. An event at exactly `now` counts as passed.
///
/// `events` must be non-empty and ascending; `PrayerTable` guarantees both.
pub fn next_event(events: &[DailyEvent], now: TimeOfDay) -> &DailyEvent {
    let now_minutes = now.minutes_since_midnight();
    events
        .iter()
        .find(|e| e.time.minutes_since_midnight() > now_minutes)
        .unwrap_or(&events[0])
}

/// Minutes from `now` until `event`, wrapping past midnight. An event at
/// exactly `now` is a full day away.
pub fn minutes_until(event: &DailyEvent, now: TimeOfDay) -> i32 {
    let diff = event.time.minutes_since_midnight() - now.minutes_since_midnight();
    if diff > 0 {
        diff
    } else {
        diff + MINUTES_PER_DAY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTable {
    events: Vec<DailyEvent>,
}

impl PrayerTable {
    /// Builds a table, rejecting empty or non-ascending input.
    pub fn new(events: Vec<DailyEvent>) -> Result<Self, SalahError> {
        if events.is_empty() {
            return Err(SalahError::EmptyTable);
        }
        for pair in events.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(SalahError::UnorderedTable {
                    name: pair[1].prayer.english_name().to_string(),
                    time: pair[1].time.to_string(),
                });
            }
        }
        Ok(Self { events })
    }

    /// Five `HH:MM` strings in Fajr..Isha order.
    pub fn from_strings<S: AsRef<str>>(times: &[S]) -> Result<Self, SalahError> {
        if times.len() != Prayer::ALL.len() {
            return Err(SalahError::Config(format!(
                "expected {} prayer times, got {}",
                Prayer::ALL.len(),
                times.len()
            )));
        }
        let events = Prayer::ALL
            .iter()
            .zip(times)
            .map(|(&prayer, t)| {
                Ok(DailyEvent {
                    prayer,
                    time: TimeOfDay::parse(t.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>, SalahError>>()?;
        Self::new(events)
    }

    pub fn events(&self) -> &[DailyEvent] {
        &self.events
    }

    pub fn get(&self, prayer: Prayer) -> Option<&DailyEvent> {
        self.events.iter().find(|e| e.prayer == prayer)
    }

    pub fn next_event(&self, now: TimeOfDay) -> &DailyEvent {
        next_event(&self.events, now)
    }

    pub fn next_prayer(&self, now: TimeOfDay) -> NextPrayer {
        let event = *self.next_event(now);
        NextPrayer {
            event,
            minutes_remaining: minutes_until(&event, now),
            tomorrow: event.time.minutes_since_midnight() <= now.minutes_since_midnight(),
        }
    }
}

impl Default for PrayerTable {
    fn default() -> Self {
        let events = Prayer::ALL
            .iter()
            .zip(DEFAULT_PRAYER_TIMES)
            .map(|(&prayer, time)| DailyEvent { prayer, time })
            .collect();
        Self { events }
    }
}
