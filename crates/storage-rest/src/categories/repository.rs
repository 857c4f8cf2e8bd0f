use std::sync::Arc;

use async_trait::async_trait;

use questlog_core::categories::{Category, CategoryRepositoryTrait, CategoryUpdate, NewCategory};
use questlog_core::Result;

use super::model::{CategoryChanges, CategoryRow, NewCategoryRow, CATEGORIES_TABLE};
use crate::client::{Filter, Order, QuerySpec, RestClient};

pub struct CategoryRepository {
    client: Arc<RestClient>,
}

impl CategoryRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        CategoryRepository { client }
    }

    fn row_spec(owner_id: &str, category_id: &str) -> QuerySpec {
        QuerySpec::for_owner(owner_id).filter(Filter::eq("id", category_id))
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn list_categories(&self, owner_id: &str, search: Option<&str>) -> Result<Vec<Category>> {
        let spec = QuerySpec::for_owner(owner_id)
            .maybe_filter(search.map(|s| Filter::contains("name", s)))
            .order(Order::asc("name"));
        let rows = self
            .client
            .select::<CategoryRow>(CATEGORIES_TABLE, &spec)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn get_category(&self, owner_id: &str, category_id: &str) -> Result<Category> {
        let row = self
            .client
            .select_one::<CategoryRow>(CATEGORIES_TABLE, &Self::row_spec(owner_id, category_id))
            .await?;
        Ok(Category::from(row))
    }

    async fn insert_new_category(
        &self,
        owner_id: &str,
        new_category: NewCategory,
    ) -> Result<Category> {
        let payload = NewCategoryRow::from_domain(owner_id, new_category);
        let row = self
            .client
            .insert::<CategoryRow, _>(CATEGORIES_TABLE, &payload)
            .await?;
        Ok(Category::from(row))
    }

    async fn update_category(
        &self,
        owner_id: &str,
        category_update: CategoryUpdate,
    ) -> Result<Category> {
        let spec = Self::row_spec(owner_id, &category_update.id);
        let changes = CategoryChanges::from(category_update);
        let row = self
            .client
            .update::<CategoryRow, _>(CATEGORIES_TABLE, &spec, &changes)
            .await?;
        Ok(Category::from(row))
    }

    /// The store's foreign key turns this into a conflict while tasks still
    /// reference the category; the service layer checks first, this is the
    /// backstop.
    async fn delete_category(&self, owner_id: &str, category_id: &str) -> Result<usize> {
        self.client
            .delete(CATEGORIES_TABLE, &Self::row_spec(owner_id, category_id))
            .await
    }
}
