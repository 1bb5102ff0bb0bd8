use crate::catalog::model::{Catalog, Event};
use crate::display::{detail_schedule, listing_schedule, MISSING_DESCRIPTION};
use crate::registration::CallToAction;
use crate::status::{evaluate, EventStatus};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Type filter value that shows every entry
pub const ALL_TYPES: &str = "todos";

const PAGE_TITLE_SUFFIX: &str = "UAO";

#[derive(Debug, Clone)]
pub struct Card {
    pub url: String,
    pub image_path: Option<String>,
    pub status: EventStatus,
    pub name: String,
    pub event_type: Option<String>,
    pub schedule: String,
    pub place: String,
}

/// Workshop entry of the listing, shown without a status badge
#[derive(Debug, Clone)]
pub struct Story {
    pub url: String,
    pub image_path: Option<String>,
    pub name: String,
    pub event_type: Option<String>,
    pub schedule: String,
    pub place: String,
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    pub cards: Vec<Card>,
    pub stories: Vec<Story>,
    /// Distinct types across the whole catalog, sorted
    pub type_options: Vec<String>,
}

pub fn detail_url(detail_page: &str, event: &Event) -> String {
    format!("{}?id={}", detail_page, event.id)
}

impl ListingPage {
    pub fn build(catalog: &Catalog, now: NaiveDateTime, detail_page: &str) -> Self {
        let cards = catalog
            .single_events()
            .map(|event| Card {
                url: detail_url(detail_page, event),
                image_path: event.details.image_path.clone(),
                status: evaluate(&event.schedule, now),
                name: event.name.to_string(),
                event_type: event.event_type.clone(),
                schedule: listing_schedule(&event.schedule),
                place: event.place.to_string(),
            })
            .collect();

        let stories = catalog
            .workshops()
            .map(|workshop| Story {
                url: detail_url(detail_page, workshop),
                image_path: workshop.details.image_path.clone(),
                name: workshop.name.to_string(),
                event_type: workshop.event_type.clone(),
                schedule: listing_schedule(&workshop.schedule),
                place: workshop.place.to_string(),
            })
            .collect();

        let type_options = catalog
            .events
            .iter()
            .filter_map(|event| event.event_type.clone())
            .unique()
            .sorted()
            .collect();

        Self {
            cards,
            stories,
            type_options,
        }
    }

    /// Keeps the cards and stories of the selected type; [`ALL_TYPES`] keeps everything
    pub fn filter_by_type(&self, selected: &str) -> Self {
        let is_shown = |event_type: &Option<String>| {
            selected == ALL_TYPES || event_type.as_deref() == Some(selected)
        };

        Self {
            cards: self
                .cards
                .iter()
                .filter(|card| is_shown(&card.event_type))
                .cloned()
                .collect(),
            stories: self
                .stories
                .iter()
                .filter(|story| is_shown(&story.event_type))
                .cloned()
                .collect(),
            type_options: self.type_options.clone(),
        }
    }
}

impl Display for ListingPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Filtro: {}",
            std::iter::once(ALL_TYPES)
                .chain(self.type_options.iter().map(String::as_str))
                .join(" | ")
        )?;

        writeln!(f, "\n== Eventos ==")?;
        for card in &self.cards {
            writeln!(
                f,
                "[{}] {} ({})\n    {} · {}\n    {}",
                card.status.label(),
                card.name,
                card.event_type.as_deref().unwrap_or_default(),
                card.schedule,
                card.place,
                card.url
            )?;
        }

        writeln!(f, "\n== Talleres ==")?;
        for story in &self.stories {
            writeln!(
                f,
                "{} ({})\n    {} · {}\n    {}",
                story.name,
                story.event_type.as_deref().unwrap_or_default(),
                story.schedule,
                story.place,
                story.url
            )?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DetailPage {
    pub name: String,
    pub page_title: String,
    pub image_path: Option<String>,
    pub status: EventStatus,
    pub place: String,
    pub schedule: String,
    pub description: Vec<String>,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    MissingId,
    NotFound(String),
}

impl Display for DetailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailError::MissingId => write!(f, "Error: ID de evento no encontrado en la URL."),
            DetailError::NotFound(id) => write!(f, "Error: El evento '{}' no existe.", id),
        }
    }
}

impl std::error::Error for DetailError {}

impl DetailPage {
    /// Looks the event up by the id it was given at load time, never by re-slugging
    pub fn build(
        catalog: &Catalog,
        id: Option<&str>,
        now: NaiveDateTime,
        registration_page: &str,
    ) -> Result<Self, DetailError> {
        let id = id.filter(|id| !id.is_empty()).ok_or(DetailError::MissingId)?;
        let event = catalog
            .find(id)
            .ok_or_else(|| DetailError::NotFound(id.to_string()))?;
        let status = evaluate(&event.schedule, now);

        let description = event
            .details
            .description
            .clone()
            .unwrap_or_else(|| vec![MISSING_DESCRIPTION.to_string()]);

        Ok(Self {
            name: event.name.to_string(),
            page_title: format!("{} | {}", event.name, PAGE_TITLE_SUFFIX),
            image_path: event.details.image_path.clone(),
            status,
            place: event.place.to_string(),
            schedule: detail_schedule(&event.schedule),
            description,
            call_to_action: CallToAction::resolve(event, status, registration_page),
        })
    }
}

impl Display for DetailPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.page_title)?;
        writeln!(f, "[{}] {}", self.status.label(), self.name)?;
        writeln!(f, "{}", self.schedule)?;
        writeln!(f, "{}\n", self.place)?;

        for paragraph in &self.description {
            writeln!(f, "{}\n", paragraph)?;
        }

        write!(
            f,
            "{} -> {}",
            self.call_to_action.label(),
            self.call_to_action.href()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::api::parse_catalog;
    use crate::status::StatusClass;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        parse_catalog(
            r##"
              { "eventos": [
                  {
                    "nombre": "Concierto de Bienvenida",
                    "categoria_principal": "Evento Único",
                    "tipo": "Música",
                    "fecha": "2025-09-29",
                    "hora_inicio": "18:00",
                    "hora_fin": "20:00",
                    "lugar": "Auditorio Principal"
                  },
                  {
                    "nombre": "Feria de Emprendimiento",
                    "categoria_principal": "Evento Único",
                    "tipo": "Emprendimiento",
                    "fecha": "2025-09-01",
                    "hora_inicio": "08:00",
                    "hora_fin": "12:00",
                    "lugar": "Plazoleta"
                  },
                  {
                    "nombre": "Taller de Guitarra",
                    "categoria_principal": "Taller Permanente",
                    "tipo": "Música",
                    "frecuencia": "Semanal",
                    "dia": "Jueves",
                    "hora_inicio": "16:00",
                    "hora_fin": "18:00",
                    "lugar": "Sala de Música",
                    "descripcion_larga": ["Clases para principiantes.", "Trae tu guitarra."]
                  }
              ] }"##,
        )
        .unwrap()
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 29)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    #[test_log::test]
    fn listing_should_split_events_and_workshops() {
        let page = ListingPage::build(&catalog(), now(), "evento-detalle.html");

        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.stories.len(), 1);
        assert_eq!(
            page.cards[0].url,
            "evento-detalle.html?id=concierto-de-bienvenida"
        );
        assert_eq!(page.cards[0].status.class(), StatusClass::Ongoing);
        assert_eq!(page.cards[1].status.class(), StatusClass::Finished);
        assert_eq!(page.stories[0].schedule, "Jueves · 4:00 p.m. - 6:00 p.m.");
    }

    #[test_log::test]
    fn type_options_should_be_unique_and_sorted() {
        let page = ListingPage::build(&catalog(), now(), "evento-detalle.html");

        assert_eq!(page.type_options, vec!["Emprendimiento", "Música"]);
    }

    #[test_log::test]
    fn filtering_by_type_should_keep_matching_entries() {
        let page = ListingPage::build(&catalog(), now(), "evento-detalle.html");

        let music = page.filter_by_type("Música");
        assert_eq!(music.cards.len(), 1);
        assert_eq!(music.stories.len(), 1);

        let everything = page.filter_by_type(ALL_TYPES);
        assert_eq!(everything.cards.len(), 2);
        assert_eq!(everything.stories.len(), 1);
    }

    #[test_log::test]
    fn detail_should_use_assigned_id() {
        let detail = DetailPage::build(
            &catalog(),
            Some("taller-de-guitarra"),
            now(),
            "registro.html",
        )
        .unwrap();

        assert_eq!(detail.page_title, "Taller de Guitarra | UAO");
        assert_eq!(detail.status, EventStatus::Open);
        assert_eq!(detail.schedule, "Semanal (Jueves) · 4:00 p.m. - 6:00 p.m.");
        assert_eq!(detail.description.len(), 2);
        assert!(detail
            .call_to_action
            .href()
            .starts_with("registro.html?nombre=Taller+de+Guitarra"));
    }

    #[test_log::test]
    fn detail_without_description_should_use_placeholder() {
        let detail = DetailPage::build(
            &catalog(),
            Some("feria-de-emprendimiento"),
            now(),
            "registro.html",
        )
        .unwrap();

        assert_eq!(detail.description, vec![MISSING_DESCRIPTION.to_string()]);
        assert_eq!(detail.call_to_action.label(), "Evento Finalizado");
    }

    #[test_log::test]
    fn empty_description_string_and_list_should_render_differently() {
        let catalog = parse_catalog(
            r##"
              { "eventos": [
                  { "nombre": "Cine Foro", "descripcion_larga": "", "lugar": "Sala 1" },
                  { "nombre": "Club de Ajedrez", "descripcion_larga": [], "lugar": "Sala 2" }
              ] }"##,
        )
        .unwrap();

        let empty_text =
            DetailPage::build(&catalog, Some("cine-foro"), now(), "registro.html").unwrap();
        let empty_list =
            DetailPage::build(&catalog, Some("club-de-ajedrez"), now(), "registro.html").unwrap();

        assert_eq!(empty_text.description, vec![MISSING_DESCRIPTION.to_string()]);
        assert!(empty_list.description.is_empty());
    }

    #[test_log::test]
    fn missing_id_should_be_reported() {
        let result = DetailPage::build(&catalog(), None, now(), "registro.html");

        assert_eq!(result.unwrap_err(), DetailError::MissingId);
    }

    #[test_log::test]
    fn unknown_id_should_be_reported() {
        let error = DetailPage::build(&catalog(), Some("no-existe"), now(), "registro.html")
            .unwrap_err();

        assert_eq!(error.to_string(), "Error: El evento 'no-existe' no existe.");
    }
}
