use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const SINGLE_EVENT_CATEGORY: &str = "Evento Único";
const WORKSHOP_CATEGORY: &str = "Taller Permanente";

#[derive(Debug, Clone)]
pub struct Catalog {
    pub events: Vec<Event>,
}

impl Catalog {
    pub fn find(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn single_events(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|event| event.category == Category::SingleEvent)
    }

    pub fn workshops(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|event| event.category == Category::Workshop)
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    /// Assigned once when the catalog is loaded; renaming afterwards keeps it
    pub id: String,
    pub name: String,
    pub category: Category,
    pub event_type: Option<String>,
    pub schedule: Schedule,
    pub place: String,
    pub details: EventDetails,
}

#[derive(Debug, Clone)]
pub struct EventDetails {
    pub image_path: Option<String>,
    /// `None` when the catalog has no text for it; an empty list renders no paragraphs
    pub description: Option<Vec<String>>,
    pub registration_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    SingleEvent,
    Workshop,
    Other(String),
    Unknown,
}

impl From<Option<&str>> for Category {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(SINGLE_EVENT_CATEGORY) => Category::SingleEvent,
            Some(WORKSHOP_CATEGORY) => Category::Workshop,
            Some(other) => Category::Other(other.to_string()),
            None => Category::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    Single {
        date: NaiveDate,
        hours: TimeRange,
    },
    Recurring {
        frequency: String,
        day: Option<String>,
        hours: TimeRange,
    },
    Unscheduled,
}

impl Schedule {
    /// Start and end instants of a single event, in local wall-clock time
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self {
            Schedule::Single { date, hours } => {
                Some((date.and_time(hours.start), date.and_time(hours.end)))
            }
            _ => None,
        }
    }
}
