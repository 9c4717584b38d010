//! Axum route handlers for the report views.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::presenter::export::{content_disposition, export_file_name, export_json};
use crate::presenter::print::render_print_document;
use crate::presenter::view::{render_report, render_tab, ReportView, Tab, TabView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

/// GET /api/v1/plan
pub async fn handle_get_plan(State(state): State<AppState>) -> Result<Json<ReportView>, AppError> {
    let (generated, tab) = state.session.current()?;
    Ok(Json(render_report(&generated, tab)))
}

/// DELETE /api/v1/plan
///
/// "New Strategy": drops the plan so the client returns to the form.
pub async fn handle_reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.session.reset()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/plan/tabs/:tab
///
/// Renders one tab without changing the selection.
pub async fn handle_get_tab(
    State(state): State<AppState>,
    Path(tab): Path<Tab>,
) -> Result<Json<TabView>, AppError> {
    let (generated, _) = state.session.current()?;
    Ok(Json(render_tab(&generated.plan, tab)))
}

/// PUT /api/v1/plan/tab
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Json(request): Json<SelectTabRequest>,
) -> Result<Json<TabView>, AppError> {
    let generated = state.session.select_tab(request.tab)?;
    Ok(Json(render_tab(&generated.plan, request.tab)))
}

/// GET /api/v1/plan/export
///
/// Downloads the plan as `{Business_Name}_SEO_Plan.json`.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let (generated, _) = state.session.current()?;
    let file_name = export_file_name(&generated.plan.business_name);
    let body = export_json(&generated.plan)?;

    let disposition = HeaderValue::from_str(&content_disposition(&file_name))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid export file name: {e}")))?;

    info!("Exporting plan {} as {file_name}", generated.submission_id);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/plan/print
pub async fn handle_print(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (generated, _) = state.session.current()?;
    Ok(Html(render_print_document(&generated.plan)))
}
