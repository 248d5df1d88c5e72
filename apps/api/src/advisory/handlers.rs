//! Axum route handlers for the advisory panel and the selection state.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::advisory::selection::SelectionView;
use crate::advisory::AdvisoryOutcome;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub code: Option<String>,
}

/// GET /api/v1/occupations/:code/insights
///
/// Always answers for a known occupation; provider failures come back as the
/// fallback insight with `source: "fallback"`.
pub async fn handle_get_insights(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<AdvisoryOutcome>, AppError> {
    let occupation = state
        .catalog
        .get(&code)
        .ok_or_else(|| AppError::unknown_occupation(&code))?;
    Ok(Json(state.advisor.insights_for(occupation).await))
}

/// GET /api/v1/selection
pub async fn handle_get_selection(State(state): State<AppState>) -> Json<SelectionView> {
    Json(state.selection.view().await)
}

/// PUT /api/v1/selection
///
/// `{"code": "261313"}` selects and starts the advisory fetch;
/// `{"code": null}` returns to the overview.
pub async fn handle_put_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<SelectionView>, AppError> {
    let Some(code) = request.code else {
        return Ok(Json(state.selection.clear().await));
    };

    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::Validation("code cannot be empty".to_string()));
    }

    let occupation = state
        .catalog
        .get(code)
        .ok_or_else(|| AppError::unknown_occupation(code))?;
    Ok(Json(state.selection.select(occupation).await))
}
