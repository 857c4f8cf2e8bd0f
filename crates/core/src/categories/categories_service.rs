use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};
use crate::tasks::{TaskFilters, TaskRepositoryTrait};

/// Service for managing categories.
///
/// Categories never touch the ledger; the only business rule here is the
/// referential guard: a category cannot be deleted while tasks reference it.
pub struct CategoryService<C: CategoryRepositoryTrait, T: TaskRepositoryTrait> {
    category_repo: Arc<C>,
    task_repo: Arc<T>,
}

impl<C: CategoryRepositoryTrait, T: TaskRepositoryTrait> CategoryService<C, T> {
    pub fn new(category_repo: Arc<C>, task_repo: Arc<T>) -> Self {
        CategoryService {
            category_repo,
            task_repo,
        }
    }
}

#[async_trait]
impl<C: CategoryRepositoryTrait, T: TaskRepositoryTrait> CategoryServiceTrait
    for CategoryService<C, T>
{
    async fn get_categories(&self, owner_id: &str, search: Option<&str>) -> Result<Vec<Category>> {
        self.category_repo.list_categories(owner_id, search).await
    }

    async fn get_category(&self, owner_id: &str, category_id: &str) -> Result<Category> {
        self.category_repo.get_category(owner_id, category_id).await
    }

    async fn create_category(&self, owner_id: &str, new_category: NewCategory) -> Result<Category> {
        new_category.validate()?;
        debug!("Creating category '{}'", new_category.name);
        self.category_repo
            .insert_new_category(owner_id, new_category)
            .await
    }

    async fn update_category(
        &self,
        owner_id: &str,
        category_update: CategoryUpdate,
    ) -> Result<Category> {
        category_update.validate()?;
        self.category_repo
            .update_category(owner_id, category_update)
            .await
    }

    async fn delete_category(&self, owner_id: &str, category_id: &str) -> Result<usize> {
        // The store also enforces this with a foreign key; checking here
        // turns the failure into a message the caller can show as-is.
        let referencing = self
            .task_repo
            .count_tasks_for_category(owner_id, category_id)
            .await?;
        if referencing > 0 {
            return Err(Error::ConstraintViolation(format!(
                "Category {} still has {} task(s)",
                category_id, referencing
            )));
        }
        self.category_repo
            .delete_category(owner_id, category_id)
            .await
    }

    async fn task_counts(&self, owner_id: &str) -> Result<HashMap<String, usize>> {
        let tasks = self
            .task_repo
            .list_tasks(owner_id, &TaskFilters::default())
            .await?;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for task in tasks {
            *counts.entry(task.category_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}
