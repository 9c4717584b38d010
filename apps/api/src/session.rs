//! In-memory session for the single-user strategy tool.
//!
//! Lifecycle: idle → submitting → (success | error) → idle.
//! Exactly one submission may be in flight; `begin_submission` hands out a
//! `SubmissionGuard` that returns the session to idle when dropped, so an
//! abandoned request never leaves the session stuck in `submitting`.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::plan::Plan;
use crate::presenter::view::Tab;

pub const IN_FLIGHT_MESSAGE: &str = "A strategy is already being generated";
pub const NOTHING_TO_RENDER_MESSAGE: &str = "Nothing to render yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Submitting,
}

/// A plan together with the submission that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub plan: Plan,
}

#[derive(Debug)]
pub struct Session {
    phase: Phase,
    current: Option<GeneratedPlan>,
    last_error: Option<String>,
    active_tab: Tab,
    updated_at: DateTime<Utc>,
}

/// What the client needs to decide between the form and the report.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub phase: Phase,
    pub has_plan: bool,
    pub error: Option<String>,
    pub active_tab: Tab,
    pub updated_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            current: None,
            last_error: None,
            active_tab: Tab::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Shared handle stored in `AppState`.
#[derive(Clone, Default)]
pub struct SharedSession(Arc<Mutex<Session>>);

impl SharedSession {
    fn lock(&self) -> MutexGuard<'_, Session> {
        // A panic while holding the lock leaves plain data behind; keep serving it.
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> SessionStatus {
        let session = self.lock();
        SessionStatus {
            phase: session.phase,
            has_plan: session.current.is_some(),
            error: session.last_error.clone(),
            active_tab: session.active_tab,
            updated_at: session.updated_at,
        }
    }

    /// Marks the session as submitting. Fails with `Conflict` when a
    /// submission is already in flight. Clears the previous plan and error
    /// and resets the tab selection.
    pub fn begin_submission(&self) -> Result<SubmissionGuard, AppError> {
        let mut session = self.lock();
        if session.phase == Phase::Submitting {
            return Err(AppError::Conflict(IN_FLIGHT_MESSAGE.to_string()));
        }
        session.phase = Phase::Submitting;
        session.current = None;
        session.last_error = None;
        session.active_tab = Tab::default();
        session.updated_at = Utc::now();

        let submission_id = Uuid::new_v4();
        info!("Submission {submission_id} started");
        Ok(SubmissionGuard {
            session: self.clone(),
            submission_id,
            finished: false,
        })
    }

    /// Records a failure that happened before any submission began,
    /// such as an invalid form. The current plan is left untouched.
    pub fn record_rejection(&self, err: &AppError) {
        let mut session = self.lock();
        session.last_error = Some(err.user_message());
        session.updated_at = Utc::now();
    }

    /// The plan on display, or `NotFound` while on the form.
    pub fn current(&self) -> Result<(GeneratedPlan, Tab), AppError> {
        let session = self.lock();
        session
            .current
            .clone()
            .map(|plan| (plan, session.active_tab))
            .ok_or_else(|| AppError::NotFound(NOTHING_TO_RENDER_MESSAGE.to_string()))
    }

    pub fn select_tab(&self, tab: Tab) -> Result<GeneratedPlan, AppError> {
        let mut session = self.lock();
        let current = session
            .current
            .clone()
            .ok_or_else(|| AppError::NotFound(NOTHING_TO_RENDER_MESSAGE.to_string()))?;
        session.active_tab = tab;
        session.updated_at = Utc::now();
        Ok(current)
    }

    /// "New Strategy": discards the plan and returns to the form.
    pub fn reset(&self) -> Result<(), AppError> {
        let mut session = self.lock();
        if session.phase == Phase::Submitting {
            return Err(AppError::Conflict(IN_FLIGHT_MESSAGE.to_string()));
        }
        session.current = None;
        session.last_error = None;
        session.active_tab = Tab::default();
        session.updated_at = Utc::now();
        Ok(())
    }
}

/// Proof of the single in-flight submission. Consumed by `succeed` or `fail`;
/// dropping it unfinished returns the session to idle.
pub struct SubmissionGuard {
    session: SharedSession,
    submission_id: Uuid,
    finished: bool,
}

impl SubmissionGuard {
    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn succeed(mut self, plan: Plan) -> GeneratedPlan {
        let generated = GeneratedPlan {
            submission_id: self.submission_id,
            generated_at: Utc::now(),
            plan,
        };
        {
            let mut session = self.session.lock();
            session.phase = Phase::Idle;
            session.current = Some(generated.clone());
            session.last_error = None;
            session.updated_at = generated.generated_at;
        }
        self.finished = true;
        info!("Submission {} produced a plan", self.submission_id);
        generated
    }

    pub fn fail(mut self, err: &AppError) {
        {
            let mut session = self.session.lock();
            session.phase = Phase::Idle;
            session.current = None;
            session.last_error = Some(err.user_message());
            session.updated_at = Utc::now();
        }
        self.finished = true;
        warn!("Submission {} failed: {err}", self.submission_id);
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut session = self.session.lock();
        session.phase = Phase::Idle;
        session.updated_at = Utc::now();
        warn!("Submission {} abandoned before completion", self.submission_id);
    }
}
