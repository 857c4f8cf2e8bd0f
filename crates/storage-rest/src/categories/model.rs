//! Wire row types for the `categories` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use questlog_core::categories::{Category, CategoryUpdate, NewCategory};

pub const CATEGORIES_TABLE: &str = "categories";

/// A category row as the store returns it (snake_case columns).
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            owner_id: row.user_id,
            name: row.name,
            color: row.color,
            created_at: row.created_at,
        }
    }
}

/// Insert payload for the `categories` table.
#[derive(Debug, Serialize)]
pub struct NewCategoryRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
}

impl NewCategoryRow {
    pub fn from_domain(owner_id: &str, new_category: NewCategory) -> Self {
        let color = new_category.color_or_default().to_string();
        NewCategoryRow {
            id: new_category.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            user_id: owner_id.to_string(),
            name: new_category.name,
            color,
        }
    }
}

/// Patch payload for category edits.
#[derive(Debug, Serialize)]
pub struct CategoryChanges {
    pub name: String,
    pub color: String,
}

impl From<CategoryUpdate> for CategoryChanges {
    fn from(update: CategoryUpdate) -> Self {
        CategoryChanges {
            name: update.name,
            color: update.color,
        }
    }
}
