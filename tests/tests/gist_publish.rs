//! Publisher tests against a local mock gist endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::patch;
use axum::Router;
use fpl_core::{Error, MemberEntry, Snapshot};
use gist_store::{GistConfig, GistPublisher, SnapshotStore};
use parking_lot::Mutex;
use serde_json::{json, Value};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        updated_at: "2026-08-30T12:00:00.000Z".into(),
        league_id: 1234,
        league_name: "Office League".into(),
        current_gw: 3,
        deadline: Some("2026-09-03T10:00:00Z".into()),
        next_gw: Some(4),
        next_deadline: Some("2026-09-04T10:00:00Z".into()),
        members: vec![MemberEntry {
            entry_id: 101,
            rank: 1,
            last_rank: 1,
            name: "Team 101".into(),
            player: "Manager 101".into(),
            total: 200,
            gw_points: 60,
            history: vec![],
            picks: None,
        }],
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock gist API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr) -> GistConfig {
    GistConfig {
        api_base: format!("http://{addr}"),
        gist_id: "abc123".into(),
        token: "testtoken".into(),
        ..GistConfig::default()
    }
}

#[tokio::test]
async fn publish_upserts_and_returns_raw_url() {
    let captured: Arc<Mutex<Option<(HeaderMap, Value)>>> = Arc::new(Mutex::new(None));
    let sink = captured.clone();
    let app = Router::new().route(
        "/gists/:id",
        patch(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().replace((headers, body));
                Json(json!({
                    "files": {
                        "league.json": {
                            "raw_url": "https://gist.githubusercontent.com/raw/abc123/league.json"
                        }
                    }
                }))
            }
        }),
    );
    let addr = serve(app).await;

    let publisher = GistPublisher::new(config_for(addr)).unwrap();
    let url = publisher.publish(&sample_snapshot()).await.unwrap();
    assert_eq!(
        url,
        "https://gist.githubusercontent.com/raw/abc123/league.json"
    );

    let (headers, body) = captured.lock().take().expect("request reached the mock");
    assert_eq!(headers.get("authorization").unwrap(), "Bearer testtoken");
    assert_eq!(
        headers.get("accept").unwrap(),
        "application/vnd.github+json"
    );

    // The envelope carries a description and the snapshot as file content.
    assert!(body["description"].is_string());
    let content = body["files"]["league.json"]["content"]
        .as_str()
        .expect("file content is a string");
    let round_trip: Value = serde_json::from_str(content).unwrap();
    assert_eq!(round_trip["league_id"], 1234);
    assert_eq!(round_trip["members"][0]["entry_id"], 101);
    assert!(round_trip["members"][0]["picks"].is_null());
}

#[tokio::test]
async fn non_2xx_response_is_a_publish_error_with_body() {
    let app = Router::new().route(
        "/gists/:id",
        patch(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed") }),
    );
    let addr = serve(app).await;

    let publisher = GistPublisher::new(config_for(addr)).unwrap();
    let err = publisher
        .publish(&sample_snapshot())
        .await
        .expect_err("non-2xx is fatal");

    match err {
        Error::Publish { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body, "Validation Failed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_raw_url_yields_empty_string_not_failure() {
    let app = Router::new().route(
        "/gists/:id",
        patch(|| async { Json(json!({ "files": {} })) }),
    );
    let addr = serve(app).await;

    let publisher = GistPublisher::new(config_for(addr)).unwrap();
    let url = publisher.publish(&sample_snapshot()).await.unwrap();
    assert_eq!(url, "");
}
