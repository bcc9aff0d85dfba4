//! In-memory film loader and deterministic sample-data factories for tests
//! and previews.
//!
//! # Design
//! `MockFilmLoader` replaces the network loader wherever live data is
//! unwanted. The factory functions hang off `Film` itself so call sites stop
//! duplicating record literals. The module ships in the normal library (not
//! behind `cfg(test)`) so downstream consumers can use the same fixtures in
//! their own tests and previews.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::LoadError;
use crate::loader::FilmLoader;
use crate::types::Film;

/// [`FilmLoader`] backed by an in-memory key→film map.
///
/// Populate the map before handing the loader out; reads never mutate it.
/// Concurrent `load_*` calls are safe as long as no setup code inserts
/// concurrently — that discipline is a precondition on the caller, not
/// enforced with locks.
#[derive(Debug, Default)]
pub struct MockFilmLoader {
    films: HashMap<String, Film>,
}

impl MockFilmLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `film` under its identity key, replacing any previous entry for
    /// the same episode.
    pub fn insert(&mut self, film: Film) {
        self.films.insert(film.id(), film);
    }

    pub fn with_films(films: impl IntoIterator<Item = Film>) -> Self {
        let mut loader = Self::new();
        for film in films {
            loader.insert(film);
        }
        loader
    }
}

#[async_trait]
impl FilmLoader for MockFilmLoader {
    /// Strict lookup: an unmapped key is [`LoadError::MissingData`].
    async fn load_one(&self, key: &str) -> Result<Film, LoadError> {
        self.films
            .get(key)
            .cloned()
            .ok_or_else(|| LoadError::MissingData {
                key: key.to_string(),
            })
    }

    /// Best-effort lookup: unmapped keys are silently skipped, never an
    /// error. Results follow the input key order — no sorting happens here,
    /// unlike the network loader.
    async fn load_many(&self, keys: &[String]) -> Result<Vec<Film>, LoadError> {
        Ok(keys
            .iter()
            .filter_map(|key| self.films.get(key.as_str()).cloned())
            .collect())
    }
}

/// Representative crawl text; deliberately mixes `\r\n` and `\n` endings the
/// way the live API does.
const SAMPLE_CRAWL: &str = "It is a period of civil war.\r\n\
Rebel spaceships, striking\r\n\
from a hidden base, have won\r\n\
their first victory against\r\n\
the evil Galactic Empire.\n\
\n\
During the battle, Rebel\n\
spies managed to steal secret\n\
plans to the Empire's\n\
ultimate weapon, the DEATH\n\
STAR, an armored space\n\
station with enough power\n\
to destroy an entire planet.";

const EMPIRE_CRAWL: &str = "It is a dark time for the\r\n\
Rebellion. Although the Death\r\n\
Star has been destroyed,\r\n\
Imperial troops have driven the\r\n\
Rebel forces from their hidden\r\n\
base and pursued them across\r\n\
the galaxy.\n\
\n\
Evading the dreaded Imperial\n\
Starfleet, a group of freedom\n\
fighters led by Luke Skywalker\n\
has established a new secret\n\
base on the remote ice world\n\
of Hoth.";

impl Film {
    /// Deterministic sample film parameterized by episode: every field
    /// other than the identity is fixed representative content, so two
    /// calls with the same episode produce field-for-field identical
    /// records.
    pub fn sample(episode_id: u32) -> Self {
        Self {
            title: format!("Episode {episode_id}"),
            episode_id,
            opening_crawl: SAMPLE_CRAWL.to_string(),
            release_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        }
    }

    /// Canned episode 4.
    pub fn a_new_hope() -> Self {
        Self {
            title: "A New Hope".to_string(),
            episode_id: 4,
            opening_crawl: SAMPLE_CRAWL.to_string(),
            release_date: NaiveDate::from_ymd_opt(1977, 5, 25),
        }
    }

    /// Canned episode 5.
    pub fn the_empire_strikes_back() -> Self {
        Self {
            title: "The Empire Strikes Back".to_string(),
            episode_id: 5,
            opening_crawl: EMPIRE_CRAWL.to_string(),
            release_date: NaiveDate::from_ymd_opt(1980, 5, 17),
        }
    }
}
