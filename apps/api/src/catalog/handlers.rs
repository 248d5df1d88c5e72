//! Axum route handlers for the Catalog API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::charts::{charts_for, OccupationCharts};
use crate::catalog::filter::{
    categories, filter, stats, CatalogStats, OccupationDetail, OccupationSummary, ALL_CATEGORIES,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OccupationQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "all_categories")]
    pub category: String,
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}

#[derive(Debug, Serialize)]
pub struct OccupationListResponse {
    pub total: usize,
    pub showing: usize,
    pub occupations: Vec<OccupationSummary>,
}

/// GET /api/v1/occupations?q=&category=
///
/// An empty result is a normal response, not an error.
pub async fn handle_list_occupations(
    State(state): State<AppState>,
    Query(params): Query<OccupationQuery>,
) -> Json<OccupationListResponse> {
    let occupations: Vec<OccupationSummary> = filter(&state.catalog, &params.q, &params.category)
        .into_iter()
        .map(OccupationSummary::from)
        .collect();

    Json(OccupationListResponse {
        total: state.catalog.len(),
        showing: occupations.len(),
        occupations,
    })
}

/// GET /api/v1/occupations/:code
pub async fn handle_get_occupation(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<OccupationDetail>, AppError> {
    let occupation = state
        .catalog
        .get(&code)
        .ok_or_else(|| AppError::unknown_occupation(&code))?;
    Ok(Json(OccupationDetail::from(occupation)))
}

/// GET /api/v1/occupations/:code/charts
pub async fn handle_get_charts(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<OccupationCharts>, AppError> {
    let occupation = state
        .catalog
        .get(&code)
        .ok_or_else(|| AppError::unknown_occupation(&code))?;
    Ok(Json(charts_for(occupation)))
}

/// GET /api/v1/categories
pub async fn handle_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(categories(&state.catalog))
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(stats(&state.catalog))
}
