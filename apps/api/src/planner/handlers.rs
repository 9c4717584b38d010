//! Axum route handlers for plan submission.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::input::BusinessInput;
use crate::presenter::view::{render_report, ReportView, Tab};
use crate::session::SessionStatus;
use crate::state::AppState;

/// POST /api/v1/plans
///
/// Validates the form, issues the single model call, and returns the report
/// opened on the first tab. An unreadable body is a validation error like a
/// blank field. Rejected with 409 while another submission is in flight.
pub async fn handle_submit(
    State(state): State<AppState>,
    payload: Result<Json<BusinessInput>, JsonRejection>,
) -> Result<Json<ReportView>, AppError> {
    let checked = payload.map_err(AppError::from).and_then(|Json(input)| {
        input.validate()?;
        Ok(input)
    });
    let input = match checked {
        Ok(input) => input,
        Err(err) => {
            state.session.record_rejection(&err);
            return Err(err);
        }
    };

    let guard = state.session.begin_submission()?;
    info!(
        "Generating plan for submission {} ({} in {})",
        guard.submission_id(),
        input.business_category.trim(),
        input.location.trim()
    );

    match state.generator.generate(&input).await {
        Ok(plan) => {
            let generated = guard.succeed(plan);
            Ok(Json(render_report(&generated, Tab::default())))
        }
        Err(err) => {
            guard.fail(&err);
            Err(err)
        }
    }
}

/// GET /api/v1/session
pub async fn handle_session_status(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.session.status())
}
