use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::agent::CompletionProvider;
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::service::chat_service::ChatService;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/chat` — relays the conversation and always answers with JSON.
/// The body is parsed as JSON whatever `Content-Type` the caller sent.
pub async fn chat_handler<P: CompletionProvider>(
    State(svc): State<ChatService<P>>,
    body: Bytes,
) -> Response {
    let span = info_span!("relay", request_id = %Uuid::new_v4());
    relay(svc, body).instrument(span).await
}

async fn relay<P: CompletionProvider>(svc: ChatService<P>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(request) => request,
        Err(e) => return error_response(&AppError::InvalidBody { message: e.to_string() }),
    };

    match svc.chat(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => error_response(&err),
    }
}

/// OPTIONS `/chat` — empty preflight answer; the headers come from the router
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// GET `/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found_handler() -> Response {
    let body = ChatResponse::failure("Not found", "This endpoint does not exist.");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub async fn method_not_allowed_handler() -> Response {
    let body = ChatResponse::failure("Method not allowed", "This endpoint does not accept that method.");
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    let status = err.status_code();
    if err.is_validation() {
        debug!("Rejected chat request: {err}");
    } else if status.is_server_error() {
        error!("Chat function error: {err}");
    } else {
        warn!("Chat request not served: {err}");
    }

    let body = ChatResponse::failure(err.public_message(), err.fallback_reply());
    (status, Json(body)).into_response()
}
