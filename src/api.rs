//! HTTP API endpoints for playing a game.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::game::GameError;
use crate::ladder::{PrizeLadderEntry, PRIZE_LADDER};
use crate::protocol::{
    AnswerRequest, AnswerResponse, LifelineRequest, LifelineResponse, SessionResponse,
    StartResponse,
};
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/start", post(start_game))
        .route("/api/answer", post(submit_answer))
        .route("/api/lifeline", post(use_lifeline))
        .route("/api/ladder", get(prize_ladder))
        .route("/api/session", get(session_status))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start a new game.
///
/// POST /api/start
///
/// Discards any game in progress.
pub async fn start_game(State(state): State<Arc<AppState>>) -> Response {
    match state.start_game().await {
        Ok((question, lifelines)) => {
            Json(StartResponse::Started { question, lifelines }).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to start game: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StartResponse::Error {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Answer the current question.
///
/// POST /api/answer
///
/// An unreadable body is treated as no answer at all, which is a wrong answer.
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Json<AnswerResponse> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Unreadable answer body: {}", rejection.body_text());
            AnswerRequest::default()
        }
    };
    let outcome = state.submit_answer(req.index()).await;
    Json(outcome.into())
}

/// Use a lifeline on the current question.
///
/// POST /api/lifeline
pub async fn use_lifeline(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LifelineRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Unreadable lifeline body: {}", rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                Json(LifelineResponse::Error {
                    message: format!("Invalid lifeline request: {}", rejection.body_text()),
                }),
            )
                .into_response();
        }
    };

    match state.use_lifeline(&req.kind).await {
        Ok(outcome) => Json(LifelineResponse::from(outcome)).into_response(),
        Err(e) => {
            tracing::debug!("Lifeline '{}' rejected: {}", req.kind, e);
            (
                lifeline_error_status(&e),
                Json(LifelineResponse::Error {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn lifeline_error_status(e: &GameError) -> StatusCode {
    match e {
        GameError::MissingQuestion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GameError::UnknownLifeline(_)
        | GameError::LifelineUsed(_)
        | GameError::NoActiveQuestion
        | GameError::UnsupportedLifeline(_) => StatusCode::BAD_REQUEST,
    }
}

/// The static prize ladder.
///
/// GET /api/ladder
pub async fn prize_ladder() -> Json<Vec<PrizeLadderEntry>> {
    Json(PRIZE_LADDER.to_vec())
}

/// Progress of the current game, without any answers.
///
/// GET /api/session
pub async fn session_status(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    Json(state.session_snapshot().await.into())
}
