//! Data-fetch and view-state core for the amphibians screen.
//!
//! # Overview
//! Fetches the amphibian list from a JSON endpoint and exposes it to a
//! renderer as a pushed `UiState` (`Loading`, `Success`, `Error`) with a retry
//! entry point.
//!
//! # Design
//! - `AmphibiansClient` is stateless and I/O free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `AmphibiansApi` executes that round-trip with ureq on Tokio's blocking
//!   pool. It is built from an explicit `ClientConfig`; there is no global
//!   client.
//! - `AmphibiansRepository` is the seam the view model depends on;
//!   `NetworkAmphibiansRepository` forwards to `AmphibiansApi`.
//! - `AmphibiansViewModel` owns the state in a watch channel and guards it
//!   with a fetch generation so late results never overwrite newer ones.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod repository;
pub mod state;
pub mod types;
pub mod view_model;

pub use api::AmphibiansApi;
pub use client::AmphibiansClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ConfigError};
pub use http::{HttpRequest, HttpResponse};
pub use repository::{AmphibiansRepository, NetworkAmphibiansRepository};
pub use state::UiState;
pub use types::Amphibian;
pub use view_model::AmphibiansViewModel;
