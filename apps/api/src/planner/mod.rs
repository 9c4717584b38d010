// Request Builder: turns submitted business details into one structured
// model call and hands the typed Plan to the session.
// All LLM calls go through llm_client; no direct Gemini HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod schema;
