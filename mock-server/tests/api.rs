use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Film};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn get_film_returns_200_with_film() {
    let resp = get("/films/4").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let film: Film = body_json(resp).await;
    assert_eq!(film.title, "A New Hope");
    assert_eq!(film.episode_id, 4);
    assert_eq!(film.release_date.as_deref(), Some("1977-05-25"));
}

#[tokio::test]
async fn get_film_body_uses_snake_case_keys() {
    let resp = get("/films/5").await;
    let json: serde_json::Value = body_json(resp).await;
    assert!(json.get("title").is_some());
    assert!(json.get("episode_id").is_some());
    assert!(json.get("opening_crawl").is_some());
    assert!(json.get("release_date").is_some());
}

#[tokio::test]
async fn all_six_episodes_are_served() {
    for episode in 1..=6u32 {
        let resp = get(&format!("/films/{episode}")).await;
        assert_eq!(resp.status(), StatusCode::OK, "episode {episode}");
        let film: Film = body_json(resp).await;
        assert_eq!(film.episode_id, episode);
    }
}

#[tokio::test]
async fn unknown_episode_returns_404() {
    let resp = get("/films/9").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let resp = get("/films/a-new-hope").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bytes_body_roundtrip() {
    let resp = get("/films/1").await;
    let bytes: bytes::Bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let film: Film = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(film.title, "The Phantom Menace");
}
