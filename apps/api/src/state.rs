use std::sync::Arc;

use crate::config::Config;
use crate::planner::generator::PlanGenerator;
use crate::session::SharedSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable plan generator. Default: GeminiPlanGenerator.
    pub generator: Arc<dyn PlanGenerator>,
    pub session: SharedSession,
}
