//! Error types for the film loaders.
//!
//! # Design
//! Transport failures and undecodable payloads get distinct `FetchError`
//! variants because callers frequently branch on "the network is broken"
//! versus "the server sent something we don't understand." Non-2xx statuses
//! land in `Http` with the raw status code and body for debugging.
//! `LoadError` wraps fetch failures for the network path and adds
//! `MissingData` for strict single-key lookups against a mock loader.

use thiserror::Error;

/// Errors surfaced by the generic resource fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed: unreachable host, timeout, broken
    /// connection.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected shape, field naming
    /// convention, or date format.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

/// Errors returned by [`FilmLoader`](crate::loader::FilmLoader) operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A network fetch failed; propagated unchanged from the fetcher.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The requested key has no film mapped to it (strict single lookup).
    #[error("no film mapped for key {key:?}")]
    MissingData { key: String },
}
