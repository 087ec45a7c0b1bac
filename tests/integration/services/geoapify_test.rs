//! Geoapify geocoding and places client tests

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};
use AttractionBuddy::config::{GeocodingConfig, PlacesConfig};
use AttractionBuddy::models::Coordinates;
use AttractionBuddy::services::{GeoapifyGeocoder, GeoapifyPlaces, Geocoder, PlacesProvider};
use AttractionBuddy::AttractionError;

fn geocoding_config(server: &MockServer) -> GeocodingConfig {
    GeocodingConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
    }
}

fn places_config(server: &MockServer) -> PlacesConfig {
    PlacesConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        radius_meters: 5000,
        limit: 10,
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_geocoder_resolves_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("text", "Paris"))
        .and(query_param("type", "city"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"lat": 48.8566, "lon": 2.3522, "city": "Paris", "country": "France"}]
        })))
        .mount(&server)
        .await;
    let geocoder = GeoapifyGeocoder::new(geocoding_config(&server)).unwrap();

    let location = geocoder.resolve("  Paris ").await.unwrap().unwrap();

    assert_eq!(location.city, "Paris");
    assert_eq!(location.coordinates, Coordinates { latitude: 48.8566, longitude: 2.3522 });
}

#[tokio::test]
async fn test_geocoder_unknown_city_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;
    let geocoder = GeoapifyGeocoder::new(geocoding_config(&server)).unwrap();

    assert!(geocoder.resolve("Atlantis").await.unwrap().is_none());
}

#[tokio::test]
async fn test_geocoder_rejected_key_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid apiKey"))
        .mount(&server)
        .await;
    let geocoder = GeoapifyGeocoder::new(geocoding_config(&server)).unwrap();

    let error = geocoder.resolve("Paris").await.unwrap_err();
    assert_matches!(error, AttractionError::Transport { status: 401, .. });
}

#[tokio::test]
async fn test_places_search_builds_circle_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .and(query_param("categories", "entertainment.museum"))
        .and(query_param("filter", "circle:2.3522,48.8566,5000"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "FeatureCollection",
            "features": [
                {"properties": {"name": "Louvre", "lat": 48.8606, "lon": 2.3376, "website": "https://www.louvre.fr"}},
                {"properties": {"lat": 48.86, "lon": 2.34}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let places = GeoapifyPlaces::new(places_config(&server)).unwrap();

    let found = places
        .search(Coordinates { latitude: 48.8566, longitude: 2.3522 }, 5000, "entertainment.museum")
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Louvre");
    assert_eq!(found[0].link, "https://www.louvre.fr");
}

#[tokio::test]
async fn test_places_empty_result_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&server)
        .await;
    let places = GeoapifyPlaces::new(places_config(&server)).unwrap();

    let found = places
        .search(Coordinates { latitude: 0.0, longitude: 0.0 }, 5000, "beach")
        .await
        .unwrap();
    assert!(found.is_empty());
}
