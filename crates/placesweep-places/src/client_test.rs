use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "placesweep-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_puts_key_first() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url("details/json", &[("place_id", "ChIJ123")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?key=test-key&place_id=ChIJ123"
    );
}

#[test]
fn build_url_tolerates_trailing_slashes() {
    let client = test_client("https://maps.googleapis.com/maps/api/place//");
    let url = client.build_url("textsearch/json", &[]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/textsearch/json?key=test-key"
    );
}

#[test]
fn build_url_encodes_query_text() {
    let client = test_client("https://maps.googleapis.com/maps/api/place");
    let url = client
        .build_url("textsearch/json", &[("query", "cafe in Yaounde, Cameroon")])
        .unwrap();
    assert!(
        url.as_str()
            .contains("query=cafe+in+Yaounde%2C+Cameroon"),
        "query param should be form-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}
