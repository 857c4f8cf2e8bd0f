//! Categories domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORY_COLOR, MIN_NAME_LEN};
use crate::errors::{Result, ValidationError};

/// Domain model representing a task category.
///
/// Purely organizational: categories carry no ledger impact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NewCategory {
    /// Validates the new category data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }

    /// The color to store, falling back to the default palette entry.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_CATEGORY_COLOR)
    }
}

/// Input model for updating an existing category.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl CategoryUpdate {
    /// Validates the category update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().len() < MIN_NAME_LEN {
        return Err(ValidationError::InvalidInput(format!(
            "Category name must be at least {} characters",
            MIN_NAME_LEN
        ))
        .into());
    }
    Ok(())
}
