mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use lexalign::config::{LexalignConfig, LexiconConfig};
use lexalign::lexicon::{InMemoryLexicon, LexiconSlot};
use lexalign::server::{AppState, create_router, spawn_lexicon_loader};

fn router(slot: Arc<LexiconSlot>) -> Router {
    let state = AppState::new(&LexalignConfig::default(), slot).unwrap();
    create_router(state)
}

fn ready_slot() -> Arc<LexiconSlot> {
    let lexicon = InMemoryLexicon::from_synonym_groups(vec![
        vec!["happy".to_string(), "glad".to_string()],
        vec!["big".to_string(), "huge".to_string()],
    ])
    .unwrap();
    Arc::new(LexiconSlot::ready(Arc::new(lexicon)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_greeting() {
    let app = router(Arc::new(LexiconSlot::new()));
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Hello": "World"}));
}

#[tokio::test]
async fn test_stemmer_endpoint() {
    let app = router(Arc::new(LexiconSlot::new()));
    let (status, body) = get(&app, "/stemmer/running").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("run"));
}

#[tokio::test]
async fn test_synsets_endpoint() {
    let app = router(ready_slot());

    let (status, body) = get(&app, "/synsets/happy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["glad", "happy"]));

    let (status, body) = get(&app, "/synsets/zebra").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["zebra"]));
}

#[tokio::test]
async fn test_synsets_before_lexicon_loaded() {
    let slot = Arc::new(LexiconSlot::new());
    let app = router(slot.clone());

    let (status, body) = get(&app, "/synsets/happy").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");

    // the failure was not cached
    let lexicon = InMemoryLexicon::from_synonym_groups(vec![vec![
        "happy".to_string(),
        "glad".to_string(),
    ]])
    .unwrap();
    slot.install(Arc::new(lexicon)).unwrap();

    let (status, body) = get(&app, "/synsets/happy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["glad", "happy"]));
}

#[tokio::test]
async fn test_align_endpoint() {
    let app = router(ready_slot());
    let (status, body) = post_json(
        &app,
        "/align",
        json!({"hypothesis": ["big", "happy"], "reference": ["huge", "huge"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["matches"],
        json!([{"hypothesis": 0, "reference": 1, "stage": "synonym"}])
    );
    assert_eq!(body["unmatched_hypothesis"][0]["word"], "happi");
}

#[tokio::test]
async fn test_align_unavailable() {
    let app = router(Arc::new(LexiconSlot::new()));
    let (status, body) = post_json(
        &app,
        "/align",
        json!({"hypothesis": ["cat"], "reference": ["dog"]}),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("not been loaded"));
}

#[tokio::test]
async fn test_wordnet_loader_installs_database() {
    let dir = common::sample_wordnet();
    let slot = Arc::new(LexiconSlot::new());
    let app = router(slot.clone());

    let lexicon = LexiconConfig {
        wordnet_dir: Some(dir.path().to_path_buf()),
        synonyms_file: None,
    };
    spawn_lexicon_loader(slot.clone(), lexicon)
        .await
        .unwrap()
        .unwrap();
    assert!(slot.is_ready());

    let (status, body) = get(&app, "/synsets/car").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["auto", "automobile", "car", "machine", "motorcar"])
    );
}

#[tokio::test]
async fn test_wordnet_loader_failure_leaves_slot_empty() {
    let dir = tempfile::tempdir().unwrap();
    let slot = Arc::new(LexiconSlot::new());

    let lexicon = LexiconConfig {
        wordnet_dir: Some(dir.path().join("missing")),
        synonyms_file: None,
    };
    let result = spawn_lexicon_loader(slot.clone(), lexicon)
        .await
        .unwrap();
    assert!(result.unwrap_err().is_unavailable());
    assert!(!slot.is_ready());
}

#[tokio::test]
async fn test_synonyms_file_loader_installs_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synonyms.json");
    std::fs::write(&path, r#"[["big", "huge", "large"]]"#).unwrap();

    let slot = Arc::new(LexiconSlot::new());
    let app = router(slot.clone());
    let lexicon = LexiconConfig {
        wordnet_dir: Some(dir.path().join("missing")),
        synonyms_file: Some(path),
    };
    spawn_lexicon_loader(slot.clone(), lexicon)
        .await
        .unwrap()
        .unwrap();

    let (status, body) = get(&app, "/synsets/big").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["big", "huge", "large"]));
}
