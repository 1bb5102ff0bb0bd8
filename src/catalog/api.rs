use super::{dto::CatalogResponse, model::Catalog};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::fmt::{Display, Formatter};
use tracing::{error, info};

pub struct CatalogAPI {
    client: ClientWithMiddleware,
}

impl CatalogAPI {
    pub fn new(max_retries: u32) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self { client }
    }

    /**
    Loads the whole catalog once, from an http(s) URL or a local file path.
    Every event comes out with its identifier assigned.
    */
    #[tracing::instrument(skip(self))]
    pub async fn get_catalog(&self, source: &str) -> Result<Catalog, CatalogError> {
        let json_response = if is_remote(source) {
            self.fetch(source).await?
        } else {
            read_file(source).await?
        };

        let catalog = parse_catalog(&json_response)?;

        info!("Loaded {} events", catalog.events.len());

        Ok(catalog)
    }

    async fn fetch(&self, url: &str) -> Result<String, CatalogError> {
        info!("Fetching catalog");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Error sending request: {:?}", e);
            CatalogError::Fetch(e.to_string())
        })?;

        response
            .error_for_status()
            .map_err(|e| {
                error!("Request failed: {:?}", e);
                CatalogError::Fetch(e.to_string())
            })?
            .text()
            .await
            .map_err(|e| {
                error!("Received invalid response: {:?}", e);
                CatalogError::Fetch(e.to_string())
            })
    }
}

pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    match serde_json::from_str::<CatalogResponse>(json) {
        Ok(parsed_response) => parsed_response.to_model(),
        Err(e) => {
            error!("Response parse failed: {:?}", e);
            Err(CatalogError::InvalidResponse(e.to_string()))
        }
    }
}

async fn read_file(path: &str) -> Result<String, CatalogError> {
    info!("Reading catalog file");

    tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read '{}': {:?}", path, e);
        CatalogError::Read(e.to_string())
    })
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[derive(Debug)]
pub enum CatalogError {
    Fetch(String),
    Read(String),
    InvalidResponse(String),
    InvalidEvent { name: String, reason: &'static str },
    DuplicateIdentifier(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Fetch(reason) => write!(f, "failed to fetch catalog: {}", reason),
            CatalogError::Read(reason) => write!(f, "failed to read catalog: {}", reason),
            CatalogError::InvalidResponse(reason) => write!(f, "invalid catalog: {}", reason),
            CatalogError::InvalidEvent { name, reason } => {
                write!(f, "invalid event '{}': {}", name, reason)
            }
            CatalogError::DuplicateIdentifier(id) => {
                write!(f, "identifier '{}' is used by more than one event", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
