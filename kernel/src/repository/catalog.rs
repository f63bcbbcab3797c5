use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::catalog::{Genre, MaterialType};

#[mockall::automock]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_all_material_types(&self) -> AppResult<Vec<MaterialType>>;
    async fn find_all_genres(&self) -> AppResult<Vec<Genre>>;
}
