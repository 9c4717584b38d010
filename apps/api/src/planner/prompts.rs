// All LLM prompt constants for the Planner module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System instruction for plan generation.
pub const PLAN_SYSTEM: &str = "You are an expert Local SEO strategist. \
    You write realistic, policy-compliant Google Business Profile strategies \
    for small local businesses.";

/// Compliance rules embedded in every plan prompt.
/// Rule 6 fixes the emphasis of the plan; the report tabs are labelled to match.
pub const COMPLIANCE_RULES: &str = "\
CRITICAL COMPLIANCE RULES:
1. NEVER include phone numbers in text (suggest using the GBP \"Call Now\" button instead).
2. No fake or incentivized reviews.
3. No social media links, shorteners, or messaging app links in the GBP post content.
4. Focus on topical relevance and local geo-targeting.
5. Ensure all suggestions are realistic and follow Google Business Profile policies.
6. NEW BUSINESS WEIGHTAGE: 70% Links (PEN & Local Authority), 20% Reputation, 10% Content/GBP Optimization.
   Ensure the Links section is extremely detailed, providing specific, high-value local outreach targets and entity-building strategies.";

/// Plan generation prompt template.
/// Replace: {business_name}, {business_category}, {location}, {optional_details}, {compliance_rules}
pub const PLAN_PROMPT_TEMPLATE: &str = "\
Generate a full Local SEO content and optimization plan for the following business:
Business Name: {business_name}
Category: {business_category}
Location: {location}
{optional_details}
{compliance_rules}";
