//! Plan generation: builds the prompt and issues the one model call per submission.
//!
//! Flow: BusinessInput → prompt + response schema → LLM generate → typed Plan.
//! A response that does not deserialize into `Plan` is a failed generation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, MISSING_API_KEY_MESSAGE};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::input::BusinessInput;
use crate::models::plan::Plan;
use crate::planner::prompts::{COMPLIANCE_RULES, PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};
use crate::planner::schema::plan_response_schema;

/// Produces a Plan for validated business details.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, input: &BusinessInput) -> Result<Plan, AppError>;
}

/// Production generator backed by the Gemini client.
pub struct GeminiPlanGenerator {
    llm: LlmClient,
    schema: Value,
    system: String,
}

impl GeminiPlanGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            schema: plan_response_schema(),
            system: format!("{PLAN_SYSTEM} {JSON_ONLY_SYSTEM}"),
        }
    }
}

#[async_trait]
impl PlanGenerator for GeminiPlanGenerator {
    async fn generate(&self, input: &BusinessInput) -> Result<Plan, AppError> {
        let prompt = build_plan_prompt(input);
        info!(
            "Requesting plan for {:?} ({} chars of prompt)",
            input.business_name.trim(),
            prompt.len()
        );

        self.llm
            .generate_json::<Plan>(&prompt, &self.system, &self.schema)
            .await
            .map_err(into_app_error)
    }
}

fn into_app_error(err: LlmError) -> AppError {
    match err {
        LlmError::MissingApiKey => AppError::Configuration(MISSING_API_KEY_MESSAGE.to_string()),
        LlmError::Parse(e) => AppError::Llm(format!("Invalid response format from model: {e}")),
        LlmError::EmptyContent => AppError::Llm("Model returned no content".to_string()),
        other => AppError::Llm(format!("Plan generation call failed: {other}")),
    }
}

/// Fills the plan template. Optional details appear only when non-blank.
pub fn build_plan_prompt(input: &BusinessInput) -> String {
    let mut optional_details = Vec::new();
    if let Some(website) = input.website() {
        optional_details.push(format!("Website: {website}"));
    }
    if let Some(services) = input.services() {
        optional_details.push(format!("Services/Specialties: {services}"));
    }

    PLAN_PROMPT_TEMPLATE
        .replace("{business_name}", input.business_name.trim())
        .replace("{business_category}", input.business_category.trim())
        .replace("{location}", input.location.trim())
        .replace("{optional_details}", &optional_details.join("\n"))
        .replace("{compliance_rules}", COMPLIANCE_RULES)
}
