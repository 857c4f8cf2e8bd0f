use async_trait::async_trait;
use std::collections::HashMap;

use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::errors::Result;

/// Trait for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Lists categories for the owner, ordered by name. `search` is a
    /// case-insensitive substring match evaluated by the store.
    async fn list_categories(&self, owner_id: &str, search: Option<&str>) -> Result<Vec<Category>>;
    async fn get_category(&self, owner_id: &str, category_id: &str) -> Result<Category>;
    async fn insert_new_category(&self, owner_id: &str, new_category: NewCategory)
        -> Result<Category>;
    async fn update_category(
        &self,
        owner_id: &str,
        category_update: CategoryUpdate,
    ) -> Result<Category>;
    async fn delete_category(&self, owner_id: &str, category_id: &str) -> Result<usize>;
}

/// Trait for category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn get_categories(&self, owner_id: &str, search: Option<&str>) -> Result<Vec<Category>>;
    async fn get_category(&self, owner_id: &str, category_id: &str) -> Result<Category>;
    async fn create_category(&self, owner_id: &str, new_category: NewCategory) -> Result<Category>;
    async fn update_category(
        &self,
        owner_id: &str,
        category_update: CategoryUpdate,
    ) -> Result<Category>;
    /// Deletes a category. Rejected with a constraint violation while any
    /// task still references it.
    async fn delete_category(&self, owner_id: &str, category_id: &str) -> Result<usize>;
    /// Number of tasks referencing each category, keyed by category id.
    async fn task_counts(&self, owner_id: &str) -> Result<HashMap<String, usize>>;
}
