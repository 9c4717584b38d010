use anyhow::Context;

use crate::errors::AppError;
use crate::models::plan::Plan;

const EXPORT_SUFFIX: &str = "_SEO_Plan.json";

/// Download name for a plan: each run of whitespace in the business name
/// becomes a single underscore.
pub fn export_file_name(business_name: &str) -> String {
    let mut name = String::with_capacity(business_name.len() + EXPORT_SUFFIX.len());
    let mut in_whitespace = false;
    for c in business_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name.push_str(EXPORT_SUFFIX);
    name
}

/// Pretty-printed JSON of the plan, keyed exactly as the model returned it.
pub fn export_json(plan: &Plan) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(plan).context("Failed to serialize plan for export")?;
    Ok(json)
}

/// `Content-Disposition` value for the download.
pub fn content_disposition(file_name: &str) -> String {
    let quoted = file_name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{quoted}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::fixtures::bakery_plan;

    #[test]
    fn test_file_name_replaces_whitespace_runs() {
        assert_eq!(
            export_file_name("Blue Ribbon Bakery"),
            "Blue_Ribbon_Bakery_SEO_Plan.json"
        );
        assert_eq!(
            export_file_name("Joe's \t  Pizza\nPlace"),
            "Joe's_Pizza_Place_SEO_Plan.json"
        );
    }

    #[test]
    fn test_file_name_keeps_edge_whitespace_as_underscore() {
        assert_eq!(export_file_name(" Cafe "), "_Cafe__SEO_Plan.json");
    }

    #[test]
    fn test_export_round_trips_to_equal_plan() {
        let plan = bakery_plan();
        let json = export_json(&plan).unwrap();
        let parsed: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
        assert!(json.contains("\n  \"BusinessName\": \"Blue Ribbon Bakery\""));
    }

    #[test]
    fn test_content_disposition_quotes_file_name() {
        assert_eq!(
            content_disposition("Blue_Ribbon_Bakery_SEO_Plan.json"),
            "attachment; filename=\"Blue_Ribbon_Bakery_SEO_Plan.json\""
        );
        assert_eq!(
            content_disposition("The_\"Best\"_SEO_Plan.json"),
            "attachment; filename=\"The_\\\"Best\\\"_SEO_Plan.json\""
        );
    }
}
