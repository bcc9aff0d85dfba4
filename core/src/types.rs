//! Domain model for the film API.
//!
//! # Design
//! `Film` mirrors the wire schema but is defined independently from the
//! mock-server crate; integration tests catch schema drift. The API sends
//! snake_case field names, which serde's default mapping from Rust field
//! names already covers. `release_date` arrives as a plain `YYYY-MM-DD`
//! calendar string (no time, no offset), so it gets a dedicated serde module
//! instead of chrono's default parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single film returned by the API.
///
/// A pure value: immutable after construction, whether decoded from a
/// response body or built by a mock factory. Two films are the same entity
/// iff their `episode_id` matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    /// May contain mixed `\r\n` / `\n` line endings; preserved verbatim.
    pub opening_crawl: String,
    /// `None` when the source omits the field or sends `null`.
    #[serde(default, with = "calendar_date")]
    pub release_date: Option<NaiveDate>,
}

impl Film {
    /// Identity key: the episode number rendered as decimal text. Loaders
    /// resolve films by this key.
    pub fn id(&self) -> String {
        self.episode_id.to_string()
    }
}

/// Serde adapter pinning `release_date` to the `%Y-%m-%d` calendar format.
///
/// A present-but-malformed date string is a decode error; only an absent or
/// `null` field maps to `None`.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
