//! Injectable film-loading library.
//!
//! # Overview
//! Defines a small abstract capability — resolve one film by key, or many —
//! with two interchangeable implementations: a network loader that fetches
//! concurrently from a film API and sorts results by episode, and an
//! in-memory mock loader for tests and previews. Consumers take a
//! [`FilmLoader`] at construction time (defaulting to the network variant in
//! production wiring) and never learn which one they got.
//!
//! # Design
//! - `Film` is a pure value; identity is the episode number as text.
//! - The generic fetcher performs one GET per call, no retry, no cache, and
//!   keeps transport, HTTP-status and decode failures distinguishable.
//! - The network loader's batch is atomic and deterministically ordered;
//!   the mock loader's batch is best-effort and input-ordered. The
//!   asymmetry is part of the contract.
//! - Sample data lives in [`mock`] as factories attached to `Film`, so
//!   fixtures are built once and reused instead of re-written per call site.

pub mod error;
pub mod fetch;
pub mod loader;
pub mod mock;
pub mod network;
pub mod types;

pub use error::{FetchError, LoadError};
pub use fetch::fetch_json;
pub use loader::FilmLoader;
pub use mock::MockFilmLoader;
pub use network::{NetworkFilmLoader, DEFAULT_BASE_URL};
pub use types::Film;
