use agendauao::catalog::api::{CatalogAPI, CatalogError};
use agendauao::catalog::model::Category;
use agendauao::page::{DetailPage, ListingPage, ALL_TYPES};
use agendauao::status::{evaluate, EventStatus};
use chrono::{NaiveDate, NaiveDateTime};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn evening_of_concert() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 29)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap()
}

#[test_log::test(tokio::test)]
async fn should_load_catalog_from_file() {
    let catalog = CatalogAPI::new(0)
        .get_catalog(&fixture_path("eventos.json"))
        .await
        .unwrap();

    assert_eq!(catalog.events.len(), 6);
    assert_eq!(catalog.single_events().count(), 3);
    assert_eq!(catalog.workshops().count(), 2);
    assert_eq!(
        catalog.find("convocatoria-abierta").unwrap().category,
        Category::Other("Convocatoria".to_string())
    );
}

#[test_log::test(tokio::test)]
async fn should_assign_ids_only_to_events_without_one() {
    let catalog = CatalogAPI::new(0)
        .get_catalog(&fixture_path("eventos.json"))
        .await
        .unwrap();

    let ids: Vec<&str> = catalog.events.iter().map(|event| event.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "concierto-de-bienvenida",
            "cafe-uao",
            "feria-2025",
            "taller-de-fotografia",
            "multiples-espacios",
            "convocatoria-abierta",
        ]
    );
}

#[test_log::test(tokio::test)]
async fn assigned_ids_should_survive_renames() {
    let mut catalog = CatalogAPI::new(0)
        .get_catalog(&fixture_path("eventos.json"))
        .await
        .unwrap();

    catalog.events[0].name = "Concierto de Clausura".to_string();

    let detail = DetailPage::build(
        &catalog,
        Some("concierto-de-bienvenida"),
        evening_of_concert(),
        "registro.html",
    )
    .unwrap();

    assert_eq!(detail.name, "Concierto de Clausura");
}

#[test_log::test(tokio::test)]
async fn statuses_should_follow_the_clock() {
    let catalog = CatalogAPI::new(0)
        .get_catalog(&fixture_path("eventos.json"))
        .await
        .unwrap();

    let status_of = |id: &str| evaluate(&catalog.find(id).unwrap().schedule, evening_of_concert());

    assert_eq!(status_of("concierto-de-bienvenida"), EventStatus::Ongoing);
    assert_eq!(status_of("cafe-uao"), EventStatus::Upcoming);
    assert_eq!(status_of("feria-2025"), EventStatus::Finished);
    assert_eq!(status_of("taller-de-fotografia"), EventStatus::Open);
    assert_eq!(status_of("convocatoria-abierta"), EventStatus::Unavailable);
}

#[test_log::test(tokio::test)]
async fn should_render_listing_and_detail() {
    let catalog = CatalogAPI::new(0)
        .get_catalog(&fixture_path("eventos.json"))
        .await
        .unwrap();

    let listing = ListingPage::build(&catalog, evening_of_concert(), "evento-detalle.html");

    assert_eq!(
        listing.type_options,
        vec!["Artes", "Charla", "Emprendimiento", "Música"]
    );
    assert_eq!(listing.filter_by_type("Artes").stories.len(), 2);
    assert_eq!(listing.filter_by_type("Artes").cards.len(), 0);
    assert_eq!(listing.filter_by_type(ALL_TYPES).cards.len(), 3);

    let rendered = listing.to_string();
    assert!(rendered.contains("[En curso] Concierto de Bienvenida (Música)"));
    assert!(rendered.contains("evento-detalle.html?id=multiples-espacios"));

    let detail = DetailPage::build(&catalog, Some("cafe-uao"), evening_of_concert(), "registro.html")
        .unwrap();

    assert!(detail.call_to_action.opens_new_tab());
    assert!(detail
        .to_string()
        .ends_with("Inscríbete Ahora (Enlace Externo) -> https://forms.gle/cafe-uao"));
}

#[test_log::test(tokio::test)]
async fn missing_file_should_fail_to_read() {
    let result = CatalogAPI::new(0)
        .get_catalog(&fixture_path("no-existe.json"))
        .await;

    assert!(matches!(result, Err(CatalogError::Read(_))));
}

#[test_log::test(tokio::test)]
async fn unreachable_url_should_fail_to_fetch() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = CatalogAPI::new(0)
        .get_catalog(&format!("http://127.0.0.1:{}/eventos.json", port))
        .await;

    assert!(matches!(result, Err(CatalogError::Fetch(_))));
}
