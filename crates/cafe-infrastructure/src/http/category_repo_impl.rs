// ============================================================================
// Café Infrastructure - HTTP Category Repository
// File: crates/cafe-infrastructure/src/http/category_repo_impl.rs
// ============================================================================

use std::sync::Arc;
use async_trait::async_trait;
use tracing::{error, info};

use cafe_core::domain::raw::{map_list, unwrap_envelope};
use cafe_core::domain::{Category, CategoryInput, EntityId};
use cafe_core::error::ClientError;
use cafe_core::repositories::CategoryRepository;
use cafe_shared::constants::endpoints;

use super::api_client::{require_id, to_body, ApiClient};

pub struct HttpCategoryRepository {
    client: Arc<ApiClient>,
}

impl HttpCategoryRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    async fn list_public(&self) -> Result<Vec<Category>, ClientError> {
        let body = self.client.get(endpoints::PUBLIC_CATEGORIES).await?;
        Ok(map_list(&unwrap_envelope(body), Category::from_json))
    }

    async fn list(&self) -> Result<Vec<Category>, ClientError> {
        let body = self.client.get(endpoints::ADMIN_CATEGORIES).await.map_err(|e| {
            error!("Failed to list categories: {}", e);
            e
        })?;
        Ok(map_list(&unwrap_envelope(body), Category::from_json))
    }

    async fn get(&self, id: &EntityId) -> Result<Category, ClientError> {
        let body = self.client.get(&endpoints::category(id.as_str())).await?;
        Ok(Category::from_json(&unwrap_envelope(body)))
    }

    async fn create(&self, input: &CategoryInput) -> Result<Category, ClientError> {
        let body = self
            .client
            .post(endpoints::ADMIN_CATEGORIES, &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to create category '{}': {}", input.name, e);
                e
            })?;

        let created = Category::from_json(&unwrap_envelope(body));
        info!("Category created: {}", created.name);
        Ok(created)
    }

    async fn update(&self, category: &Category, input: &CategoryInput) -> Result<Category, ClientError> {
        let id = require_id(category.id.as_ref(), "Category")?;
        let body = self
            .client
            .put(&endpoints::category(id.as_str()), &to_body(input)?)
            .await
            .map_err(|e| {
                error!("Failed to update category {}: {}", id, e);
                e
            })?;

        Ok(Category::from_json(&unwrap_envelope(body)))
    }

    async fn delete(&self, category: &Category) -> Result<bool, ClientError> {
        let id = require_id(category.id.as_ref(), "Category")?;
        self.client
            .delete(&endpoints::category(id.as_str()))
            .await
            .map_err(|e| {
                error!("Failed to delete category {}: {}", id, e);
                e
            })?;
        Ok(true)
    }
}
