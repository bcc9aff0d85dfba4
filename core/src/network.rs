//! Network-backed film loader.
//!
//! # Design
//! `NetworkFilmLoader` holds only a shared `reqwest::Client` and a base URL;
//! it carries no state between calls and no cache, so identical keys
//! requested twice perform two fetches. `load_many` fans out one task per
//! key and masks the non-deterministic completion order behind an explicit
//! sort on `episode_id` before returning.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{FetchError, LoadError};
use crate::fetch::fetch_json;
use crate::loader::FilmLoader;
use crate::types::Film;

/// Base URL of the public film API used by [`NetworkFilmLoader::default`].
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// [`FilmLoader`] that resolves keys against a live film API.
#[derive(Debug, Clone)]
pub struct NetworkFilmLoader {
    client: reqwest::Client,
    base_url: String,
}

impl NetworkFilmLoader {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn film_url(&self, key: &str) -> String {
        format!("{}/films/{key}", self.base_url)
    }
}

impl Default for NetworkFilmLoader {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl FilmLoader for NetworkFilmLoader {
    /// One GET against `{base}/films/{key}`; fetcher errors propagate
    /// unchanged.
    async fn load_one(&self, key: &str) -> Result<Film, LoadError> {
        let film = fetch_json(&self.client, &self.film_url(key)).await?;
        Ok(film)
    }

    /// Fetch every key concurrently and fail the whole call if any single
    /// fetch fails — no partial success. On success the films come back
    /// sorted ascending by `episode_id`, independent of the key order
    /// supplied and of completion order.
    ///
    /// Sibling fetches are not cancelled when one fails; they run to
    /// completion detached, which does not change the observable result.
    async fn load_many(&self, keys: &[String]) -> Result<Vec<Film>, LoadError> {
        debug!(count = keys.len(), "loading films concurrently");
        let mut tasks = Vec::with_capacity(keys.len());
        for key in keys {
            let loader = self.clone();
            let key = key.clone();
            tasks.push(tokio::spawn(async move { loader.load_one(&key).await }));
        }

        let mut films = Vec::with_capacity(tasks.len());
        for task in tasks {
            let film = task
                .await
                .map_err(|e| FetchError::Network(e.to_string()))??;
            films.push(film);
        }

        films.sort_by_key(|film| film.episode_id);
        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_url_interpolates_key() {
        let loader = NetworkFilmLoader::new("http://localhost:3000");
        assert_eq!(loader.film_url("4"), "http://localhost:3000/films/4");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let loader = NetworkFilmLoader::new("http://localhost:3000/");
        assert_eq!(loader.film_url("1"), "http://localhost:3000/films/1");
    }

    #[test]
    fn default_targets_public_api() {
        let loader = NetworkFilmLoader::default();
        assert_eq!(loader.film_url("6"), "https://swapi.dev/api/films/6");
    }
}
