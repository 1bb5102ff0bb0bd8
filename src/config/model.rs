#[derive(Debug)]
pub struct Config {
    pub catalog_source: String,
    pub pages: PagesConfig,
    pub fetch_max_retries: u32,
    pub event_id: Option<String>,
    pub type_filter: String,
}

/// Relative links the rendered pages point to
#[derive(Debug)]
pub struct PagesConfig {
    pub detail_page: String,
    pub registration_page: String,
}
