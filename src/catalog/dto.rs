use super::api::CatalogError;
use super::model::{Catalog, Category, Event, EventDetails, Schedule, TimeRange};
use crate::identity::slug;
use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use serde::{de, Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use tracing::{debug, error, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub eventos: Vec<EventResponse>,
}

// Note: the JS site treats empty strings as missing, so optional text fields are
// normalized through `deserialize_opt_str`
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub categoria_principal: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub fecha: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_time")]
    pub hora_inicio: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_time")]
    pub hora_fin: Option<NaiveTime>,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub frecuencia: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub dia: Option<String>,
    #[serde(default)]
    pub lugar: String,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub imagen_path: Option<String>,
    #[serde(default)]
    pub descripcion_larga: Option<SingleOrVec<String>>,
    #[serde(default, deserialize_with = "deserialize_opt_str")]
    pub enlace_inscripcion: Option<String>,
}

impl CatalogResponse {
    /// Converts every record, assigning `slug(nombre)` to the ones without an id.
    ///
    /// Identifiers are only ever assigned here, and two records sharing one is
    /// rejected.
    pub fn to_model(self) -> Result<Catalog, CatalogError> {
        let events = self
            .eventos
            .into_iter()
            .map(EventResponse::to_model)
            .collect::<Result<Vec<Event>, CatalogError>>()?;

        if let Some(duplicate) = events.iter().map(|event| &event.id).duplicates().next() {
            error!("Identifier '{}' is shared by more than one event", duplicate);
            return Err(CatalogError::DuplicateIdentifier(duplicate.to_string()));
        }

        Ok(Catalog { events })
    }
}

impl EventResponse {
    #[tracing::instrument(skip(self), fields(self.nombre = %self.nombre))]
    pub fn to_model(self) -> Result<Event, CatalogError> {
        let schedule = self.schedule()?;
        let id = self.id.unwrap_or_else(|| {
            let id = slug(&self.nombre);
            debug!("Assigned id '{}'", id);
            id
        });

        if id.is_empty() {
            warn!("Event name yields an empty id");
        }

        let description = match self.descripcion_larga {
            Some(SingleOrVec::Single(paragraph)) if paragraph.is_empty() => None,
            Some(SingleOrVec::Single(paragraph)) => Some(vec![paragraph]),
            Some(SingleOrVec::Vec(paragraphs)) => Some(paragraphs),
            None => None,
        };

        Ok(Event {
            id,
            category: Category::from(self.categoria_principal.as_deref()),
            name: self.nombre,
            event_type: self.tipo,
            schedule,
            place: self.lugar,
            details: EventDetails {
                image_path: self.imagen_path,
                description,
                registration_link: self.enlace_inscripcion,
            },
        })
    }

    fn schedule(&self) -> Result<Schedule, CatalogError> {
        match (&self.frecuencia, self.fecha) {
            (Some(frequency), date) => {
                if date.is_some() {
                    warn!("Event has both a date and a frequency, treating it as recurring");
                }

                Ok(Schedule::Recurring {
                    frequency: frequency.to_string(),
                    day: self.dia.clone(),
                    hours: self.hours()?,
                })
            }
            (None, Some(date)) => Ok(Schedule::Single {
                date,
                hours: self.hours()?,
            }),
            (None, None) => {
                warn!("Event has neither a date nor a frequency");
                Ok(Schedule::Unscheduled)
            }
        }
    }

    fn hours(&self) -> Result<TimeRange, CatalogError> {
        match (self.hora_inicio, self.hora_fin) {
            (Some(start), Some(end)) => Ok(TimeRange { start, end }),
            _ => {
                error!("Scheduled event is missing its start or end time");
                Err(CatalogError::InvalidEvent {
                    name: self.nombre.to_string(),
                    reason: "missing hora_inicio or hora_fin",
                })
            }
        }
    }
}

fn deserialize_opt_str<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_opt_str(d)? {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, DATE_FORMAT)
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid date '{s}': {err}"))),
    }
}

fn deserialize_time<'de, D>(d: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_opt_str(d)? {
        None => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, TIME_FORMAT)
            .map(Some)
            .map_err(|err| de::Error::custom(format!("invalid time '{s}': {err}"))),
    }
}
