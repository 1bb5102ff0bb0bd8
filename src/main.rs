use agendauao::catalog::api::CatalogAPI;
use agendauao::config::env_loader::load_config;
use agendauao::page::{DetailPage, ListingPage};
use agendauao::tracing::setup_loki;
use chrono::Local;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_loki().await;
    let config = load_config();

    info!("Starting with {:?}", config);

    let api = CatalogAPI::new(config.fetch_max_retries);

    let exit_code = match api.get_catalog(&config.catalog_source).await {
        Ok(catalog) => {
            let now = Local::now().naive_local();

            match config.event_id.as_deref() {
                Some(event_id) => {
                    match DetailPage::build(
                        &catalog,
                        Some(event_id),
                        now,
                        &config.pages.registration_page,
                    ) {
                        Ok(detail) => println!("{}", detail),
                        Err(err) => {
                            warn!("Detail lookup failed: {:?}", err);
                            println!("{}", err);
                        }
                    }
                }
                None => {
                    let listing = ListingPage::build(&catalog, now, &config.pages.detail_page)
                        .filter_by_type(&config.type_filter);

                    print!("{}", listing);
                }
            }

            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error loading and processing the catalog: {}", err);
            ExitCode::FAILURE
        }
    };

    if let Some((controller, handle)) = loki {
        controller.shutdown().await;
        if let Err(err) = handle.await {
            error!("Loki background task failed: {}", err);
        }
    }

    exit_code
}
