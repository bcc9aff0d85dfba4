//! Local stand-in for the public film API.
//!
//! Serves the six canonical episodes as fixed data so the network loader can
//! be exercised end to end without leaving the machine. The `Film` schema
//! here is defined independently from the core crate on purpose; the core's
//! integration tests catch any drift between the two.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Wire representation of one film: snake_case keys, `release_date` as a
/// `YYYY-MM-DD` string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub release_date: Option<String>,
}

pub type Db = Arc<HashMap<u32, Film>>;

pub fn app() -> Router {
    Router::new()
        .route("/films/{id}", get(get_film))
        .with_state(seed_films())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_film(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Film>, StatusCode> {
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// The fixed six-episode data set. Crawls are abbreviated but keep the
/// mixed `\r\n` / `\n` line endings of the real payloads.
fn seed_films() -> Db {
    let films = [
        Film {
            title: "The Phantom Menace".to_string(),
            episode_id: 1,
            opening_crawl: "Turmoil has engulfed the\r\nGalactic Republic.\n\nThe taxation of trade routes\nto outlying star systems is\nin dispute.".to_string(),
            release_date: Some("1999-05-19".to_string()),
        },
        Film {
            title: "Attack of the Clones".to_string(),
            episode_id: 2,
            opening_crawl: "There is unrest in the Galactic\r\nSenate.\n\nSeveral thousand solar systems\nhave declared their intentions\nto leave the Republic.".to_string(),
            release_date: Some("2002-05-16".to_string()),
        },
        Film {
            title: "Revenge of the Sith".to_string(),
            episode_id: 3,
            opening_crawl: "War!\r\nThe Republic is crumbling\r\nunder attacks by the ruthless\r\nSith Lord, Count Dooku.\n\nThere are heroes on both sides.\nEvil is everywhere.".to_string(),
            release_date: Some("2005-05-19".to_string()),
        },
        Film {
            title: "A New Hope".to_string(),
            episode_id: 4,
            opening_crawl: "It is a period of civil war.\r\nRebel spaceships, striking\r\nfrom a hidden base, have won\r\ntheir first victory against\r\nthe evil Galactic Empire.\n\nDuring the battle, Rebel\nspies managed to steal secret\nplans to the Empire's\nultimate weapon, the DEATH\nSTAR.".to_string(),
            release_date: Some("1977-05-25".to_string()),
        },
        Film {
            title: "The Empire Strikes Back".to_string(),
            episode_id: 5,
            opening_crawl: "It is a dark time for the\r\nRebellion.\n\nAlthough the Death Star has\nbeen destroyed, Imperial\ntroops have driven the Rebel\nforces from their hidden base.".to_string(),
            release_date: Some("1980-05-17".to_string()),
        },
        Film {
            title: "Return of the Jedi".to_string(),
            episode_id: 6,
            opening_crawl: "Luke Skywalker has returned to\r\nhis home planet of Tatooine in\r\nan attempt to rescue his\r\nfriend Han Solo.\n\nLittle does Luke know that the\nGALACTIC EMPIRE has secretly\nbegun construction on a new\narmored space station.".to_string(),
            release_date: Some("1983-05-25".to_string()),
        },
    ];

    Arc::new(films.into_iter().map(|f| (f.episode_id, f)).collect())
}
