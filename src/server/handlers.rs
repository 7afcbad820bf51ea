//! Request handlers.
//!
//! Lexicon lookups touch memory-mapped dictionary files, so they run on the
//! blocking pool.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::align::{Alignment, SynonymSet};
use crate::server::error::ApiResult;
use crate::server::state::AppState;

/// Liveness greeting.
pub async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// Synonym closure of one word.
pub async fn synsets(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> ApiResult<Json<SynonymSet>> {
    let closure = tokio::task::spawn_blocking(move || state.synonyms.expand(&word)).await??;
    Ok(Json(closure))
}

/// Stem of one word.
pub async fn stemmer(State(state): State<AppState>, Path(word): Path<String>) -> Json<String> {
    Json(state.stemmer.stem(&word))
}

/// Body of `POST /align`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignRequest {
    pub hypothesis: Vec<String>,
    pub reference: Vec<String>,
}

/// Staged alignment of two word lists.
pub async fn align(
    State(state): State<AppState>,
    Json(request): Json<AlignRequest>,
) -> ApiResult<Json<Alignment>> {
    let alignment = tokio::task::spawn_blocking(move || {
        state.aligner.align(&request.hypothesis, &request.reference)
    })
    .await??;
    Ok(Json(alignment))
}
