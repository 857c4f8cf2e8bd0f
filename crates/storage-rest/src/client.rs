//! HTTP client for the hosted data API.
//!
//! The store speaks a per-table REST dialect: rows are addressed by query
//! parameters (`column=eq.value`, `name=ilike.*needle*`, `order=col.desc`)
//! and writes return the affected rows when asked to. This client owns the
//! session credentials and the query building; the per-domain repositories
//! own table names and row types.

use log::debug;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use questlog_core::errors::{DatabaseError, Error, Result};

use crate::config::RestConfig;
use crate::errors::StorageError;

/// A single row predicate, evaluated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Exact equality on a column.
    Eq { column: String, value: String },
    /// Case-insensitive substring match on a column.
    Contains { column: String, needle: String },
}

impl Filter {
    pub fn eq(column: &str, value: impl ToString) -> Self {
        Filter::Eq {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    pub fn contains(column: &str, needle: &str) -> Self {
        Filter::Contains {
            column: column.to_string(),
            needle: needle.to_string(),
        }
    }

    fn query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq { column, value } => (column.clone(), format!("eq.{}", value)),
            Filter::Contains { column, needle } => {
                (column.clone(), format!("ilike.*{}*", needle))
            }
        }
    }
}

/// Result ordering, evaluated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    column: String,
    descending: bool,
}

impl Order {
    pub fn asc(column: &str) -> Self {
        Order {
            column: column.to_string(),
            descending: false,
        }
    }

    pub fn desc(column: &str) -> Self {
        Order {
            column: column.to_string(),
            descending: true,
        }
    }

    fn query_pair(&self) -> (String, String) {
        let direction = if self.descending { "desc" } else { "asc" };
        ("order".to_string(), format!("{}.{}", self.column, direction))
    }
}

/// Filters and ordering for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    filters: Vec<Filter>,
    order: Option<Order>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a spec scoped to one owner; every repository query begins here.
    pub fn for_owner(owner_id: &str) -> Self {
        Self::new().filter(Filter::eq("user_id", owner_id))
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn maybe_filter(mut self, filter: Option<Filter>) -> Self {
        if let Some(filter) = filter {
            self.filters.push(filter);
        }
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self.filters.iter().map(Filter::query_pair).collect();
        if let Some(order) = &self.order {
            pairs.push(order.query_pair());
        }
        pairs
    }
}

/// Client for the hosted data API, holding the session credentials.
pub struct RestClient {
    http: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl RestClient {
    pub fn new(config: RestConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(StorageError::Network)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            access_token: config.access_token,
        })
    }

    fn request(&self, method: Method, table: &str, query: &QuerySpec) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
            .query(&query.query_pairs())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(StorageError::Network)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!("Store rejected request: {} {}", status, message);
            return Err(StorageError::from_status(status, message).into());
        }
        Ok(response)
    }

    /// Fetches all rows matching the spec.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: &QuerySpec) -> Result<Vec<T>> {
        let response = self.execute(self.request(Method::GET, table, query)).await?;
        let rows = response.json::<Vec<T>>().await.map_err(StorageError::Network)?;
        Ok(rows)
    }

    /// Fetches exactly one row; not-found when the spec matches nothing.
    pub async fn select_one<T: DeserializeOwned>(&self, table: &str, query: &QuerySpec) -> Result<T> {
        let rows = self.select::<T>(table, query).await?;
        rows.into_iter().next().ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!("no matching row in {}", table)))
        })
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .request(Method::POST, table, &QuerySpec::new())
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.execute(request).await?;
        let rows = response.json::<Vec<T>>().await.map_err(StorageError::Network)?;
        rows.into_iter().next().ok_or_else(|| {
            Error::Database(DatabaseError::Internal(format!(
                "insert into {} returned no rows",
                table
            )))
        })
    }

    /// Patches the rows matching the spec and returns the first updated row.
    ///
    /// Zero matched rows means the (id, owner) pair did not line up; the
    /// write is a no-op and the caller sees not-found.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        table: &str,
        query: &QuerySpec,
        body: &B,
    ) -> Result<T> {
        let request = self
            .request(Method::PATCH, table, query)
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.execute(request).await?;
        let rows = response.json::<Vec<T>>().await.map_err(StorageError::Network)?;
        rows.into_iter().next().ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "no row matched the update in {}",
                table
            )))
        })
    }

    /// Deletes the rows matching the spec and returns how many went away.
    pub async fn delete(&self, table: &str, query: &QuerySpec) -> Result<usize> {
        let request = self
            .request(Method::DELETE, table, query)
            .header("Prefer", "return=representation");
        let response = self.execute(request).await?;
        let rows = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(StorageError::Network)?;
        Ok(rows.len())
    }
}
