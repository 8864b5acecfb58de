//! Page, asset, and action routes: everything a browser hits directly.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page_html.to_string())
}

/// GET /cv
///
/// Serves the CV as an attachment under its fixed download name.
pub async fn handle_download_cv(State(state): State<AppState>) -> Result<Response, AppError> {
    let cv = &state.portfolio.cv;
    let data = state.assets.read(cv).await?;
    tracing::info!(asset = %cv.name, "CV downloaded");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.portfolio.cv_download_name
    );
    Ok((
        [
            (header::CONTENT_TYPE, cv.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data,
    )
        .into_response())
}

/// GET /contact
///
/// Hands off to the visitor's mail client.
pub async fn handle_contact(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.portfolio.mailto())
}

/// GET /assets/:name
///
/// Only names the content model references are served.
pub async fn handle_asset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let asset = state
        .portfolio
        .find_asset(&name)
        .ok_or_else(|| AppError::NotFound(format!("Asset '{name}' not found")))?;
    let data = state.assets.read(asset).await?;

    Ok((
        [
            (header::CONTENT_TYPE, asset.content_type()),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        data,
    )
        .into_response())
}
