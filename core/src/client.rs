//! Stateless HTTP request builder and response parser for the amphibians API.
//!
//! # Design
//! `AmphibiansClient` holds only a `base_url` and carries no mutable state
//! between calls. The single operation is split into `build_get_amphibians`,
//! which produces an `HttpRequest`, and `parse_get_amphibians`, which consumes
//! an `HttpResponse`. `AmphibiansApi` performs the round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Amphibian;

/// Synchronous, stateless client for the amphibians API.
#[derive(Debug, Clone)]
pub struct AmphibiansClient {
    base_url: String,
}

impl AmphibiansClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_amphibians(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/amphibians", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode the whole list or fail. One malformed element fails the call.
    pub fn parse_get_amphibians(&self, response: HttpResponse) -> Result<Vec<Amphibian>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AmphibiansClient {
        AmphibiansClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_get_amphibians_produces_correct_request() {
        let req = client().build_get_amphibians();
        assert_eq!(req.url, "http://localhost:3000/amphibians");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = AmphibiansClient::new("https://android-kotlin-fun-mars-server.appspot.com/");
        assert_eq!(client.base_url(), "https://android-kotlin-fun-mars-server.appspot.com");
        assert_eq!(
            client.build_get_amphibians().url,
            "https://android-kotlin-fun-mars-server.appspot.com/amphibians"
        );
    }

    #[test]
    fn parse_preserves_server_order() {
        let body = r#"[
            {"name":"A","type":"Frog","description":"a","imgSrc":"a.png"},
            {"name":"B","type":"Toad","description":"b","imgSrc":"b.png"},
            {"name":"C","type":"Salamander","description":"c","imgSrc":"c.png"}
        ]"#;
        let amphibians = client().parse_get_amphibians(ok(body)).unwrap();
        let names: Vec<&str> = amphibians.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let body = r#"[{"name":"Cane Toad","type":"Toad","description":"Large.","imgSrc":"cane.png","legs":4}]"#;
        let amphibians = client().parse_get_amphibians(ok(body)).unwrap();
        assert_eq!(amphibians.len(), 1);
        assert_eq!(amphibians[0].name, "Cane Toad");
        assert_eq!(amphibians[0].img_src, "cane.png");
    }

    #[test]
    fn parse_empty_array() {
        let amphibians = client().parse_get_amphibians(ok("[]")).unwrap();
        assert!(amphibians.is_empty());
    }

    #[test]
    fn one_bad_element_fails_the_whole_list() {
        let body = r#"[
            {"name":"A","type":"Frog","description":"a","imgSrc":"a.png"},
            {"type":"Toad","description":"b","imgSrc":"b.png"}
        ]"#;
        let err = client().parse_get_amphibians(ok(body)).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_invalid_utf8_is_a_decode_error() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: vec![b'[', 0xff, 0xfe, b']'],
        };
        let err = client().parse_get_amphibians(response).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
    }

    #[test]
    fn parse_bad_json() {
        let err = client().parse_get_amphibians(ok("not json")).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn parse_object_instead_of_array() {
        let body = r#"{"name":"A","type":"Frog","description":"a","imgSrc":"a.png"}"#;
        let err = client().parse_get_amphibians(ok(body)).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn parse_non_200_status() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: b"not found".to_vec(),
        };
        let err = client().parse_get_amphibians(response).unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 404,
                body: "not found".to_string()
            }
        );
    }

    #[test]
    fn other_2xx_is_still_a_failure() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        };
        let err = client().parse_get_amphibians(response).unwrap_err();
        assert_eq!(err.status(), Some(204));
    }
}
