//! Integration tests for the OpenWeatherMap provider using WireMock.
//!
//! These tests mock the provider endpoint to verify request construction
//! and response handling without making actual API calls.

use cityweather_core::provider::openweather::OpenWeatherProvider;
use cityweather_core::{LookupError, LookupRequest, WeatherProvider};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url("test_api_key".to_string(), server.uri())
}

fn request(city: &str) -> LookupRequest {
    LookupRequest {
        city: city.to_string(),
    }
}

/// Sample success response for a current-weather request.
fn paris_response() -> serde_json::Value {
    json!({
        "cod": 200,
        "name": "Paris",
        "main": { "temp": 18.5, "humidity": 60, "pressure": 1012, "feels_like": 17.9 },
        "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" } ]
    })
}

/// Sample not-found response; the body carries the code as a string.
fn not_found_response() -> serde_json::Value {
    json!({
        "cod": "404",
        "message": "city not found"
    })
}

#[tokio::test]
async fn success_response_yields_a_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "test_api_key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_response()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let reading = provider
        .current_weather(&request("Paris"))
        .await
        .expect("lookup should succeed");

    assert_eq!(reading.city_name, "Paris");
    assert_eq!(reading.temperature_c, 18.5);
    assert_eq!(reading.description, "clear sky");
    assert_eq!(reading.humidity_pct, 60);
}

#[tokio::test]
async fn first_weather_entry_supplies_the_description() {
    let server = MockServer::start().await;

    let body = json!({
        "cod": 200,
        "name": "London",
        "main": { "temp": 11.0, "humidity": 81 },
        "weather": [
            { "description": "light rain" },
            { "description": "mist" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let reading = provider
        .current_weather(&request("London"))
        .await
        .expect("lookup should succeed");

    assert_eq!(reading.description, "light rain");
}

#[tokio::test]
async fn string_404_body_yields_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_response()))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .current_weather(&request("Atlantis"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn numeric_404_code_is_not_treated_as_not_found() {
    // Only the string form "404" means not-found; a numeric code falls
    // through to ordinary error handling.
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "cod": 404, "message": "oops" })),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .current_weather(&request("Atlantis"))
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::Fetch(_)));
}

#[tokio::test]
async fn http_error_status_yields_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current_weather(&request("Paris")).await.unwrap_err();

    match err {
        LookupError::Fetch(source) => {
            assert!(source.to_string().contains("status"));
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_yields_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current_weather(&request("Paris")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(_)));
}

#[tokio::test]
async fn missing_expected_fields_yield_fetch_error() {
    let server = MockServer::start().await;

    // Valid JSON, but no `main` object.
    let body = json!({
        "cod": 200,
        "name": "Paris",
        "weather": [ { "description": "clear sky" } ]
    });

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current_weather(&request("Paris")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(_)));
}

#[tokio::test]
async fn empty_weather_list_yields_fetch_error() {
    let server = MockServer::start().await;

    let body = json!({
        "cod": 200,
        "name": "Paris",
        "main": { "temp": 18.5, "humidity": 60 },
        "weather": []
    });

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current_weather(&request("Paris")).await.unwrap_err();

    match err {
        LookupError::Fetch(source) => {
            assert!(source.to_string().contains("no weather entries"));
        }
        other => panic!("expected Fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_yields_fetch_error() {
    // A server that is started and immediately dropped leaves a port with
    // nothing listening on it.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let provider = OpenWeatherProvider::with_base_url("test_api_key".to_string(), uri);
    let err = provider.current_weather(&request("Paris")).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(_)));
}
