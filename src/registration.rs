use crate::catalog::model::Event;
use crate::display::registration_date;
use crate::status::EventStatus;
use url::form_urlencoded;

const EXTERNAL_LINK_PREFIX: &str = "http";

/// Registration button of the detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallToAction {
    /// Opens in a new tab
    External { url: String },
    /// Opens in the same tab
    Internal { url: String },
    Disabled { label: &'static str },
}

impl CallToAction {
    pub fn resolve(event: &Event, status: EventStatus, registration_page: &str) -> Self {
        match &event.details.registration_link {
            Some(link) if link.starts_with(EXTERNAL_LINK_PREFIX) => CallToAction::External {
                url: link.to_string(),
            },
            _ => match status {
                EventStatus::Finished => CallToAction::Disabled {
                    label: "Evento Finalizado",
                },
                EventStatus::Unavailable => CallToAction::Disabled {
                    label: "Inscripción no disponible",
                },
                _ => CallToAction::Internal {
                    url: registration_url(event, registration_page),
                },
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::External { .. } => "Inscríbete Ahora (Enlace Externo)",
            CallToAction::Internal { .. } => "Inscríbete Aquí",
            CallToAction::Disabled { label } => *label,
        }
    }

    pub fn href(&self) -> &str {
        match self {
            CallToAction::External { url } | CallToAction::Internal { url } => url,
            CallToAction::Disabled { .. } => "#",
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self, CallToAction::External { .. })
    }
}

/// `<page>?nombre=..&lugar=..&fecha=..`, each value form-urlencoded once
pub fn registration_url(event: &Event, registration_page: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("nombre", &event.name)
        .append_pair("lugar", &event.place)
        .append_pair("fecha", &registration_date(&event.schedule))
        .finish();

    format!("{}?{}", registration_page, query)
}
