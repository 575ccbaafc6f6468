//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use placesweep_core::{GeoPoint, SearchStrand};
use placesweep_places::{PlacesClient, PlacesError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, "placesweep-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn term_strand(query: &str) -> SearchStrand {
    SearchStrand {
        label: format!("term:{query}"),
        query: query.to_string(),
        location: None,
        radius_m: None,
        place_type: None,
        region: Some("cm".to_string()),
    }
}

#[tokio::test]
async fn text_search_sends_query_region_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("query", "cafe in Yaounde, Cameroon"))
        .and(query_param("region", "cm"))
        .and(query_param_is_missing("pagetoken"))
        .and(query_param_is_missing("location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                { "place_id": "ChIJ_1", "name": "Cafe One", "types": ["cafe", "food"] },
                { "place_id": "ChIJ_2", "name": "Cafe Two", "types": ["cafe"] }
            ],
            "next_page_token": "tok-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search_page(&term_strand("cafe in Yaounde, Cameroon"), None)
        .await
        .expect("should parse search page");

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].place_id, "ChIJ_1");
    assert_eq!(page.results[0].types, vec!["cafe", "food"]);
    assert_eq!(page.next_page_token.as_deref(), Some("tok-2"));
}

#[tokio::test]
async fn text_search_sends_location_radius_type_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("location", "3.85,11.5"))
        .and(query_param("radius", "1500"))
        .and(query_param("type", "bakery"))
        .and(query_param("pagetoken", "tok-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let strand = SearchStrand {
        label: "grid".to_string(),
        query: "bakery".to_string(),
        location: Some(GeoPoint {
            lat: 3.85,
            lng: 11.5,
        }),
        radius_m: Some(1500),
        place_type: Some("bakery".to_string()),
        region: None,
    };

    let client = test_client(&server.uri());
    let page = client
        .text_search_page(&strand, Some("tok-9"))
        .await
        .expect("should parse search page");
    assert!(page.results.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn zero_results_is_an_empty_final_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "results": [],
            "next_page_token": "should-be-ignored"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search_page(&term_strand("nothing here"), None)
        .await
        .expect("ZERO_RESULTS is not an error");
    assert!(page.results.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn non_ok_status_returns_api_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .text_search_page(&term_strand("cafe"), None)
        .await
        .unwrap_err();

    match err {
        PlacesError::ApiStatus { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert!(message.contains("API key is invalid"));
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .text_search_page(&term_strand("cafe"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .text_search_page(&term_strand("cafe"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn place_details_requests_fields_and_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("place_id", "ChIJ_1"))
        .and(query_param("fields", "name,types,geometry"))
        .and(query_param("language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "name": "Cafe One",
                "types": ["cafe", "food"],
                "geometry": { "location": { "lat": 3.87, "lng": 11.52 } }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client
        .place_details("ChIJ_1", "name,types,geometry", "en")
        .await
        .expect("should parse details");

    assert_eq!(details.name.as_deref(), Some("Cafe One"));
    assert_eq!(
        details.types.as_deref(),
        Some(&["cafe".to_string(), "food".to_string()][..])
    );
    assert!(details.formatted_phone_number.is_none());
    assert!(details.geometry.is_some());
}

#[tokio::test]
async fn place_details_without_result_is_no_result_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "NOT_FOUND",
            "html_attributions": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .place_details("ChIJ_gone", "name", "en")
        .await
        .unwrap_err();

    match err {
        PlacesError::NoResult { place_id, status } => {
            assert_eq!(place_id, "ChIJ_gone");
            assert_eq!(status, "NOT_FOUND");
        }
        other => panic!("expected NoResult, got {other:?}"),
    }
}
