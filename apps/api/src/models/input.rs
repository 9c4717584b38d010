use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Business Name, Category, and Location are required.";

/// Business details submitted from the strategy form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessInput {
    pub business_name: String,
    pub business_category: String,
    pub location: String,
    pub website_url: Option<String>,
    pub services: Option<String>,
}

impl BusinessInput {
    /// Rejects the submission when any required field is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [&self.business_name, &self.business_category, &self.location];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Website URL, or `None` when absent or blank.
    pub fn website(&self) -> Option<&str> {
        non_blank(self.website_url.as_deref())
    }

    /// Services / specialties, or `None` when absent or blank.
    pub fn services(&self) -> Option<&str> {
        non_blank(self.services.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
