use crate::catalog::model::{Schedule, TimeRange};
use chrono::{NaiveDate, NaiveTime, Timelike};

pub const MISSING_DESCRIPTION: &str =
    "Descripción extendida no disponible. Consulte los canales oficiales de la UAO.";

/// "18:30" -> "6:30 p.m.", "00:05" -> "12:05 a.m."
pub fn format_hour_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "p.m." } else { "a.m." };

    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

pub fn format_hours(hours: &TimeRange) -> String {
    format!(
        "{} - {}",
        format_hour_12h(hours.start),
        format_hour_12h(hours.end)
    )
}

/// Day-first, as the site shows dates: "29-09-2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Schedule line of a listing entry: "29-09-2025 · 6:00 p.m. - 8:00 p.m." for
/// events, "Martes · 2:00 p.m. - 4:00 p.m." for workshops
pub fn listing_schedule(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Single { date, hours } => {
            format!("{} · {}", format_date(*date), format_hours(hours))
        }
        Schedule::Recurring { day, hours, .. } => {
            format!("{} · {}", day.as_deref().unwrap_or_default(), format_hours(hours))
        }
        Schedule::Unscheduled => String::new(),
    }
}

pub fn detail_schedule(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Single { .. } => listing_schedule(schedule),
        Schedule::Recurring {
            frequency,
            day,
            hours,
        } => format!(
            "{} ({}) · {}",
            frequency,
            day.as_deref().unwrap_or_default(),
            format_hours(hours)
        ),
        Schedule::Unscheduled => String::new(),
    }
}

/// Date text handed to the registration form
pub fn registration_date(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Single { date, hours } => {
            format!("{} ({})", format_date(*date), format_hours(hours))
        }
        Schedule::Recurring {
            frequency,
            day,
            hours,
        } => format!(
            "{}, {} ({})",
            frequency,
            day.as_deref().unwrap_or_default(),
            format_hours(hours)
        ),
        Schedule::Unscheduled => String::new(),
    }
}
