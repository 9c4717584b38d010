pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::planner::handlers as planner;
use crate::presenter::handlers as presenter;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Request Builder
        .route("/api/v1/plans", post(planner::handle_submit))
        .route("/api/v1/session", get(planner::handle_session_status))
        // Presenter
        .route(
            "/api/v1/plan",
            get(presenter::handle_get_plan).delete(presenter::handle_reset),
        )
        .route("/api/v1/plan/tabs/:tab", get(presenter::handle_get_tab))
        .route("/api/v1/plan/tab", put(presenter::handle_select_tab))
        .route("/api/v1/plan/export", get(presenter::handle_export))
        .route("/api/v1/plan/print", get(presenter::handle_print))
        .with_state(state)
}
