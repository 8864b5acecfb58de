//! JSON API over the content model and the scroll tracker.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::Portfolio;
use crate::errors::AppError;
use crate::scroll::{replay, ScrollReplay, SectionBoundary, SectionLayout};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub id: String,
    pub title: String,
    pub kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ActiveSectionRequest {
    /// Registered sections in document order.
    pub sections: Vec<SectionBoundary>,
    /// Scroll offsets, delivered as successive scroll events.
    pub offsets: Vec<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/content
pub async fn handle_get_content(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.portfolio.as_ref().clone())
}

/// GET /api/v1/sections
pub async fn handle_list_sections(State(state): State<AppState>) -> Json<Vec<SectionSummary>> {
    let sections = state
        .portfolio
        .sections
        .iter()
        .map(|s| SectionSummary {
            id: s.id.clone(),
            title: s.title.clone(),
            kind: s.content.kind_str(),
        })
        .collect();
    Json(sections)
}

/// POST /api/v1/scroll/active
///
/// Attaches a tracker for the duration of the request, replays the offsets,
/// and reports the active section after each one.
pub async fn handle_active_section(
    Json(req): Json<ActiveSectionRequest>,
) -> Result<Json<ScrollReplay>, AppError> {
    if let Some(bad) = req.offsets.iter().find(|o| !o.is_finite()) {
        return Err(AppError::Validation(format!(
            "Scroll offset must be finite, got {bad}"
        )));
    }
    let layout = SectionLayout::new(req.sections)?;
    Ok(Json(replay(layout, &req.offsets)))
}
