use chrono::{Datelike, NaiveDate, TimeDelta};
use hijri_date::HijriDate;
use tracing::debug;

use crate::error::SalahError;
use crate::types::HijriReadout;

/// Gregorian years the conversion tables cover.
pub const HIJRI_MIN_YEAR: i32 = 1938;
pub const HIJRI_MAX_YEAR: i32 = 2076;

pub fn to_hijri(date: NaiveDate, adjustment_days: i64) -> Result<HijriReadout, SalahError> {
    let adjusted = TimeDelta::try_days(adjustment_days)
        .and_then(|offset| date.checked_add_signed(offset))
        .ok_or_else(|| {
            SalahError::HijriConversion(format!(
                "cannot offset {} by {} days",
                date, adjustment_days
            ))
        })?;
    let year = adjusted.year();
    if !(HIJRI_MIN_YEAR..=HIJRI_MAX_YEAR).contains(&year) {
        return Err(SalahError::HijriOutOfRange(year));
    }

    let hijri = HijriDate::from_gr(
        year as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|e| SalahError::HijriConversion(e.to_string()))?;

    debug!(%date, adjustment_days, "converted to hijri {}-{}-{}", hijri.year(), hijri.month(), hijri.day());
    Ok(HijriReadout {
        year: hijri.year(),
        month: hijri.month(),
        day: hijri.day(),
    })
}

pub fn hijri_month_name(month: usize) -> &'static str {
    match month {
        1 => "محرم",
        2 => "صفر",
        3 => "ربيع الأول",
        4 => "ربيع الآخر",
        5 => "جمادى الأولى",
        6 => "جمادى الآخرة",
        7 => "رجب",
        8 => "شعبان",
        9 => "رمضان",
        10 => "شوال",
        11 => "ذو القعدة",
        12 => "ذو الحجة",
        _ => "",
    }
}

/// `day month year هـ`, e.g. `1 رمضان 1445 هـ`.
pub fn format_hijri(readout: &HijriReadout) -> String {
    format!(
        "{} {} {} هـ",
        readout.day,
        hijri_month_name(readout.month),
        readout.year
    )
}

/// Gregorian counterpart line, `DD/MM/YYYY`.
pub fn format_gregorian(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
