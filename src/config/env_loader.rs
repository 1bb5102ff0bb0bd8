use crate::config::model::{Config, PagesConfig};
use crate::page::ALL_TYPES;
use std::env;

const DEFAULT_CATALOG_SOURCE: &str = "eventos.json";
const DEFAULT_DETAIL_PAGE: &str = "evento-detalle.html";
const DEFAULT_REGISTRATION_PAGE: &str = "registro.html";

pub fn load_config() -> Config {
    let catalog_source = load_str_config("CATALOG_SOURCE", DEFAULT_CATALOG_SOURCE);
    let detail_page = load_str_config("DETAIL_PAGE", DEFAULT_DETAIL_PAGE);
    let registration_page = load_str_config("REGISTRATION_PAGE", DEFAULT_REGISTRATION_PAGE);
    let fetch_max_retries = load_u32_config("FETCH_MAX_RETRIES", 0);
    let event_id = env::var("EVENT_ID").ok();
    let type_filter = load_str_config("TYPE_FILTER", ALL_TYPES);

    Config {
        catalog_source,
        pages: PagesConfig {
            detail_page,
            registration_page,
        },
        fetch_max_retries,
        event_id,
        type_filter,
    }
}

fn load_str_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_u32_config(name: &str, default: u32) -> u32 {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a non-negative integer number.",
                name
            )
        }),
        Err(_) => default,
    }
}
