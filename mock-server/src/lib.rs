use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amphibian {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

impl Amphibian {
    pub fn new(name: &str, kind: &str, description: &str, img_src: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            img_src: img_src.to_string(),
        }
    }
}

/// What `GET /amphibians` answers with.
#[derive(Clone, Debug)]
pub enum Fixture {
    Amphibians(Vec<Amphibian>),
    /// Arbitrary status and body, served as `application/json`.
    Raw { status: u16, body: String },
}

impl Fixture {
    pub fn status(status: u16) -> Self {
        Fixture::Raw {
            status,
            body: String::new(),
        }
    }

    pub fn body(body: impl Into<String>) -> Self {
        Fixture::Raw {
            status: 200,
            body: body.into(),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture::Amphibians(seed())
    }
}

/// Shared handle to the served fixture. Clones see the same fixture and hit
/// counter, so a test can swap responses while the server runs.
#[derive(Clone, Default)]
pub struct MockApi {
    fixture: Arc<RwLock<Fixture>>,
    hits: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture: Arc::new(RwLock::new(fixture)),
            hits: Arc::default(),
        }
    }

    pub async fn set(&self, fixture: Fixture) {
        *self.fixture.write().await = fixture;
    }

    /// Number of `GET /amphibians` requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub fn seed() -> Vec<Amphibian> {
    const IMG: &str = "https://developer.android.com/codelabs/basic-android-kotlin-compose-amphibians-app/img";
    vec![
        Amphibian::new(
            "Great Basin Spadefoot",
            "Toad",
            "This toad spends most of its life underground due to the arid desert conditions in which it lives. Spadefoot toads earn the name because of their hind legs which are wedged to aid in digging.",
            &format!("{IMG}/great-basin-spadefoot.png"),
        ),
        Amphibian::new(
            "Roraima Bush Toad",
            "Toad",
            "This toad is typically found in South America. Its blackish color allows it to blend in with the rocks of its natural habitat.",
            &format!("{IMG}/roraima-bush-toad.png"),
        ),
        Amphibian::new(
            "Pacific Chorus Frog",
            "Frog",
            "Also known as the Pacific Treefrog, it is the most common frog on the Pacific Coast of North America. These frogs can vary in color between green and brown and can change color within a few minutes.",
            &format!("{IMG}/pacific-chorus-frog.png"),
        ),
        Amphibian::new(
            "Tiger Salamander",
            "Salamander",
            "This salamander is found in North America. It is one of the largest terrestrial salamanders and is known for its vivid striped markings.",
            &format!("{IMG}/tiger-salamander.png"),
        ),
    ]
}

pub fn app() -> Router {
    router(MockApi::default())
}

pub fn router(api: MockApi) -> Router {
    Router::new()
        .route("/amphibians", get(list_amphibians))
        .with_state(api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, MockApi::default()).await
}

pub async fn serve(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, router(api)).await
}

async fn list_amphibians(State(api): State<MockApi>) -> Response {
    let hit = api.hits.fetch_add(1, Ordering::SeqCst) + 1;
    let fixture = api.fixture.read().await.clone();
    debug!(hit, ?fixture, "serving /amphibians");
    match fixture {
        Fixture::Amphibians(amphibians) => Json(amphibians).into_response(),
        Fixture::Raw { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amphibian_serializes_wire_names() {
        let amphibian = Amphibian::new("Cane Toad", "Toad", "Large.", "cane.png");
        let json = serde_json::to_value(&amphibian).unwrap();
        assert_eq!(json["name"], "Cane Toad");
        assert_eq!(json["type"], "Toad");
        assert_eq!(json["description"], "Large.");
        assert_eq!(json["imgSrc"], "cane.png");
    }

    #[test]
    fn seed_has_distinct_names() {
        let seed = seed();
        assert!(seed.len() >= 3);
        let mut names: Vec<&str> = seed.iter().map(|a| a.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), seed.len());
    }

    #[test]
    fn default_fixture_is_seed() {
        match Fixture::default() {
            Fixture::Amphibians(list) => assert_eq!(list, seed()),
            other => panic!("unexpected fixture: {other:?}"),
        }
    }

    #[tokio::test]
    async fn clones_share_fixture_and_hits() {
        let api = MockApi::new(Fixture::status(500));
        let other = api.clone();
        other.set(Fixture::body("[]")).await;
        match &*api.fixture.read().await {
            Fixture::Raw { status, body } => {
                assert_eq!(*status, 200);
                assert_eq!(body, "[]");
            }
            other => panic!("unexpected fixture: {other:?}"),
        }
        other.hits.fetch_add(1, Ordering::SeqCst);
        assert_eq!(api.hits(), 1);
    }
}
