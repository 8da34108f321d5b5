use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::prompt::{Prompt, Session};
use crate::server::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/prompt", get(list_prompts))
        .route("/api/prompt/{id}", axum::routing::delete(delete_prompt))
        .route("/api/auth/session", get(current_session))
}

/// Axum handler for the full prompt collection
pub async fn list_prompts(State(state): State<AppState>) -> Json<Vec<Prompt>> {
    Json(state.prompts.list().await)
}

pub async fn current_session(State(state): State<AppState>) -> Json<Option<Session>> {
    Json(state.session.clone().map(|user| Session { user }))
}

pub async fn delete_prompt(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let Some(user) = &state.session else {
        return StatusCode::UNAUTHORIZED;
    };
    let Some(prompt) = state.prompts.get(&id).await else {
        return StatusCode::NOT_FOUND;
    };
    if !prompt.is_created_by(&user.id) {
        return StatusCode::FORBIDDEN;
    }
    if state.prompts.remove(&id).await {
        tracing::info!("user {} deleted prompt {id}", user.id);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
