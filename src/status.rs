use crate::catalog::model::Schedule;
use chrono::NaiveDateTime;

/// Lifecycle of an event at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// Neither a date nor a frequency
    Unavailable,
    /// Recurring workshops never finish
    Open,
    Upcoming,
    Ongoing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum StatusClass {
    #[strum(serialize = "proximamente")]
    Upcoming,
    #[strum(serialize = "en-curso")]
    Ongoing,
    #[strum(serialize = "finalizado")]
    Finished,
    #[strum(serialize = "proximamente")]
    Open,
}

impl StatusClass {
    pub fn css_class(&self) -> &'static str {
        self.into()
    }
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Unavailable => "No disponible",
            EventStatus::Open => "Abierto",
            EventStatus::Upcoming => "Próximamente",
            EventStatus::Ongoing => "En curso",
            EventStatus::Finished => "Finalizado",
        }
    }

    pub fn class(&self) -> StatusClass {
        match self {
            EventStatus::Unavailable | EventStatus::Finished => StatusClass::Finished,
            EventStatus::Open => StatusClass::Open,
            EventStatus::Upcoming => StatusClass::Upcoming,
            EventStatus::Ongoing => StatusClass::Ongoing,
        }
    }
}

/// `now` is local wall-clock time, the same frame the schedule's date and hours are in.
/// Both ends of the window count as ongoing.
pub fn evaluate(schedule: &Schedule, now: NaiveDateTime) -> EventStatus {
    if let Schedule::Recurring { .. } = schedule {
        return EventStatus::Open;
    }

    match schedule.window() {
        None => EventStatus::Unavailable,
        Some((_, end)) if now > end => EventStatus::Finished,
        Some((start, _)) if now >= start => EventStatus::Ongoing,
        Some(_) => EventStatus::Upcoming,
    }
}
