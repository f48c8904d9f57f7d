//! Domain DTO for the amphibians API.
//!
//! # Design
//! `Amphibian` mirrors the mock-server's schema but is defined independently;
//! integration tests catch drift between the two crates. Unknown keys in the
//! wire payload are ignored by serde, so server-side additions never break
//! decoding. Missing keys are a decode failure.

use serde::{Deserialize, Serialize};

/// A single amphibian record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amphibian {
    pub name: String,
    /// Category label such as "Frog" or "Toad". Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Image reference, passed through to the image loader unmodified.
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}
