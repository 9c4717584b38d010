//! Response schema declared to the model for plan generation.
//!
//! Uses the Gemini schema dialect (upper-case type names). Keys and required
//! lists must stay in step with `models::plan::Plan`.

use serde_json::{json, Value};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

/// Builds an OBJECT schema where every listed property is required.
fn object(properties: Vec<(&str, Value)>) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: serde_json::Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required
    })
}

pub fn plan_response_schema() -> Value {
    let reputation = object(vec![
        ("ReviewRequestTemplates", string_list()),
        ("NegativeReviewResponseTemplates", string_list()),
        ("SocialMediaRepostText", string_list()),
        ("Strategies", string_list()),
    ]);

    let gbp_post = object(vec![
        ("Text", string()),
        ("SuggestedMedia", string()),
        ("Keywords", string_list()),
        ("CTA", string()),
    ]);

    let blog_idea = object(vec![
        ("Title", string()),
        ("H2s", string_list()),
        ("Relevance", string()),
    ]);

    let on_page_seo = object(vec![
        ("TitleTags", string_list()),
        ("H2Headings", string_list()),
        ("MetaDescriptions", string_list()),
    ]);

    let content = object(vec![
        ("GBPPosts", json!({ "type": "ARRAY", "items": gbp_post })),
        ("BlogIdeas", json!({ "type": "ARRAY", "items": blog_idea })),
        ("OnPageSEO", on_page_seo),
        ("SocialMediaContent", string_list()),
    ]);

    let links = object(vec![
        ("GuestPostOpportunities", string_list()),
        ("OutreachTemplates", string_list()),
        ("PENLinkSuggestions", string_list()),
    ]);

    let gbp_optimization = object(vec![
        ("Categories", string_list()),
        ("Services", string_list()),
        ("PostIdeas", string_list()),
        ("PhotoVideoTips", string_list()),
        ("KeywordSuggestions", string_list()),
        ("PostingFrequency", string()),
    ]);

    object(vec![
        ("BusinessName", string()),
        ("Category", string()),
        ("Location", string()),
        ("Reputation", reputation),
        ("Content", content),
        ("Links", links),
        ("GBPOptimization", gbp_optimization),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::fixtures::bakery_plan;

    /// Walks the schema and the serialized fixture together: every required
    /// key must exist in the Plan serialization, and vice versa.
    fn assert_matches(schema: &Value, value: &Value, path: &str) {
        match schema["type"].as_str() {
            Some("OBJECT") => {
                let object = value
                    .as_object()
                    .unwrap_or_else(|| panic!("{path} should be an object"));
                let required: Vec<&str> = schema["required"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|v| v.as_str().unwrap())
                    .collect();
                assert_eq!(required.len(), object.len(), "{path} key count differs");
                for key in required {
                    let child = object
                        .get(key)
                        .unwrap_or_else(|| panic!("{path}.{key} missing from Plan"));
                    assert_matches(&schema["properties"][key], child, &format!("{path}.{key}"));
                }
            }
            Some("ARRAY") => {
                let items = value
                    .as_array()
                    .unwrap_or_else(|| panic!("{path} should be an array"));
                for item in items {
                    assert_matches(&schema["items"], item, &format!("{path}[]"));
                }
            }
            Some("STRING") => assert!(value.is_string(), "{path} should be a string"),
            other => panic!("unexpected schema type {other:?} at {path}"),
        }
    }

    #[test]
    fn test_schema_matches_plan_model() {
        let plan = serde_json::to_value(bakery_plan()).unwrap();
        assert_matches(&plan_response_schema(), &plan, "Plan");
    }

    #[test]
    fn test_top_level_sections_are_required() {
        let schema = plan_response_schema();
        let required = schema["required"].as_array().unwrap();
        for key in ["BusinessName", "Reputation", "Content", "Links", "GBPOptimization"] {
            assert!(required.iter().any(|r| r == key), "{key} not required");
        }
    }
}
