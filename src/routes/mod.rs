pub mod api_routes;

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::agent::CompletionProvider;
use crate::service::chat_service::ChatService;
use api_routes::{
    chat_handler, health_handler, method_not_allowed_handler, not_found_handler, preflight_handler,
};

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Assembles the relay router. The cross-origin headers are stamped onto
/// every response, including rejections, 404s and 405s.
pub fn router<P: CompletionProvider>(svc: ChatService<P>) -> Router {
    Router::new()
        .route("/chat", post(chat_handler::<P>).options(preflight_handler))
        .route("/functions/v1/chat", post(chat_handler::<P>).options(preflight_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(svc)
}
