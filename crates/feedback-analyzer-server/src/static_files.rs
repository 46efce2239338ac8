use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

use crate::config::FrontendVariant;
use crate::state::AppState;

#[derive(Embed)]
#[folder = "web"]
struct WebAssets;

/// Serve the configured frontend at `/`
pub async fn serve_index(State(state): State<AppState>) -> Response {
    serve_page(state.config.frontend)
}

pub async fn serve_inline() -> Response {
    serve_page(FrontendVariant::Inline)
}

pub async fn serve_modal() -> Response {
    serve_page(FrontendVariant::Modal)
}

/// Serve embedded assets, falling back to the configured frontend for any
/// unmatched route
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    serve_page(state.config.frontend)
}

fn serve_page(variant: FrontendVariant) -> Response {
    match <WebAssets as Embed>::get(variant.page()) {
        Some(content) => Html(String::from_utf8_lossy(&content.data).into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "Frontend not bundled").into_response(),
    }
}
