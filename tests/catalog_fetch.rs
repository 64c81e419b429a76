use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use royal_transfer::booking::BookingScope;
use royal_transfer::catalog::fetch::{LOAD_FAILED_MESSAGE, NO_DATA_MESSAGE, SUBMIT_FAILED_MESSAGE};
use royal_transfer::catalog::{
    CatalogSource, FetchError, NoHaptics, SectionState, VehicleSection, VehicleSource, View,
};
use royal_transfer::clients::TransferApiClient;
use royal_transfer::config::EnvironmentConfig;
use royal_transfer::dto::application_request_dto::CreateApplicationRequest;
use royal_transfer::models::Vehicle;
use royal_transfer::repositories::{
    MemoryApplicationRequestStore, MemorySettingsStore, MemoryVehicleStore,
};
use royal_transfer::{create_app, AppState};

/// Serves `router` on an ephemeral port and returns its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn serve_fleet(vehicles: Vec<Vehicle>) -> TransferApiClient {
    let state = AppState::from_stores(
        EnvironmentConfig::default(),
        MemoryVehicleStore::with_vehicles(vehicles),
        MemoryApplicationRequestStore::new(),
        MemorySettingsStore::new(),
    );
    TransferApiClient::new(serve(create_app(state)).await).unwrap()
}

fn vehicle(id: i32, class: &str, is_active: bool) -> Vehicle {
    Vehicle {
        id,
        class: class.to_string(),
        brand: "Toyota".to_string(),
        model: "Camry".to_string(),
        year: 2022,
        seats: 4,
        description: None,
        image_url: None,
        amenities: None,
        is_active,
    }
}

#[tokio::test]
async fn fetches_all_records_from_the_api() {
    let client = serve_fleet(vec![vehicle(1, "Comfort", true), vehicle(2, "VIP", false)]).await;
    let vehicles = client.fetch_vehicles().await.unwrap();
    assert_eq!(vehicles.len(), 2);
    assert!(!vehicles[1].is_active);
}

#[tokio::test]
async fn missing_vehicles_array_is_a_shape_error() {
    let base = serve(Router::new().route("/api/vehicles", get(|| async { Json(json!({ "items": [] })) }))).await;
    let client = TransferApiClient::new(base).unwrap();
    assert_eq!(client.fetch_vehicles().await.unwrap_err(), FetchError::Shape("vehicles"));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let base = serve(Router::new().route(
        "/api/vehicles",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let client = TransferApiClient::new(base).unwrap();
    assert_eq!(client.fetch_vehicles().await.unwrap_err(), FetchError::Status(503));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let base = serve(Router::new().route("/api/vehicles", get(|| async { "<html></html>" }))).await;
    let client = TransferApiClient::new(base).unwrap();
    assert!(matches!(client.fetch_vehicles().await.unwrap_err(), FetchError::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TransferApiClient::new(format!("http://{}", addr)).unwrap();
    assert!(matches!(client.fetch_vehicles().await.unwrap_err(), FetchError::Network(_)));
}

#[tokio::test]
async fn section_shows_inline_message_on_shape_error() {
    let base = serve(Router::new().route("/api/vehicles", get(|| async { Json(json!({})) }))).await;
    let client = TransferApiClient::new(base).unwrap();

    let mut section = VehicleSection::mount(Arc::new(client), Arc::new(NoHaptics));
    match section.resolved().await {
        SectionState::Unavailable { message } => assert_eq!(message, NO_DATA_MESSAGE),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn section_shows_load_error_on_server_failure() {
    let base = serve(Router::new().route(
        "/api/vehicles",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;
    let client = TransferApiClient::new(base).unwrap();

    let mut section = VehicleSection::mount(Arc::new(client), Arc::new(NoHaptics));
    match section.resolved().await {
        SectionState::Unavailable { message } => assert_eq!(message, LOAD_FAILED_MESSAGE),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn empty_fleet_falls_back_to_demo_over_http() {
    let client = serve_fleet(vec![vehicle(1, "Comfort", false)]).await;
    let mut section = VehicleSection::mount(Arc::new(client), Arc::new(NoHaptics));
    section.resolved().await;

    let catalog = section.catalog().unwrap();
    assert_eq!(catalog.source(), CatalogSource::Demo);
    assert_eq!(catalog.vehicles().len(), 5);
}

#[tokio::test]
async fn browse_select_and_order_end_to_end() {
    let client = serve_fleet(vec![vehicle(10, "Comfort", true), vehicle(11, " VIP ", true)]).await;
    let mut section = VehicleSection::mount(Arc::new(client.clone()), Arc::new(NoHaptics));
    section.resolved().await;

    let catalog = section.catalog_mut().unwrap();
    assert_eq!(catalog.active().id, "10");

    let selected = catalog.select("11").unwrap();
    assert_eq!(selected.name, "VIP");
    assert_eq!(selected.price, "от 500.00 EUR");
    assert_eq!(catalog.view(), View::Detail);

    let scope = catalog.order().clone();
    assert_eq!(scope, BookingScope::VehicleClass("VIP".to_string()));

    let created = client
        .submit_application_request(&CreateApplicationRequest {
            name: Some("Алексей".to_string()),
            phone: Some("+7 911 222 33 44".to_string()),
            contact_method: Some("whatsapp".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(created.status, "new");
    catalog.booking_mut().close();
    assert!(!catalog.booking().is_open());
}

#[tokio::test]
async fn rejected_submission_carries_the_server_message() {
    let client = serve_fleet(Vec::new()).await;
    let err = client
        .submit_application_request(&CreateApplicationRequest {
            name: Some("Алексей".to_string()),
            phone: None,
            contact_method: Some("call".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        FetchError::Rejected {
            status: 400,
            message: "Телефон обязателен для заполнения".to_string()
        }
    );
    assert_eq!(err.submission_message(), "Телефон обязателен для заполнения");
}

#[tokio::test]
async fn storage_failure_on_submit_reports_a_booking_error() {
    let requests = MemoryApplicationRequestStore::new();
    requests.set_unavailable(true);
    let state = AppState::from_stores(
        EnvironmentConfig::default(),
        MemoryVehicleStore::new(),
        requests.clone(),
        MemorySettingsStore::new(),
    );
    let client = TransferApiClient::new(serve(create_app(state)).await).unwrap();

    let err = client
        .submit_application_request(&CreateApplicationRequest {
            name: Some("Алексей".to_string()),
            phone: Some("+7 911 000 00 00".to_string()),
            contact_method: Some("call".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Status(500));
    assert_eq!(err.submission_message(), SUBMIT_FAILED_MESSAGE);
    assert!(requests.is_empty().await);
}

#[tokio::test]
async fn settings_are_fetched_for_the_header() {
    let client = serve_fleet(Vec::new()).await;
    let settings = client.fetch_settings().await.unwrap();
    assert_eq!(settings.company_name, "Royal Transfer");
    assert!(settings.phone_href().starts_with("tel:+7"));
}
