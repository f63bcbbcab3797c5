use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::catalog::{Genre, MaterialType},
    repository::catalog::CatalogRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    model::catalog::{GenreRow, MaterialTypeRow},
    ConnectionPool,
};

#[derive(new)]
pub struct CatalogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_all_material_types(&self) -> AppResult<Vec<MaterialType>> {
        let rows: Vec<MaterialTypeRow> = sqlx::query_as(
            r#"
                SELECT material_type_id, name, checkout_days
                FROM material_types
                ORDER BY material_type_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(MaterialType::from).collect())
    }

    async fn find_all_genres(&self) -> AppResult<Vec<Genre>> {
        let rows: Vec<GenreRow> = sqlx::query_as(
            r#"
                SELECT genre_id, name
                FROM genres
                ORDER BY genre_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seeded_pool;

    #[tokio::test]
    async fn lists_seeded_reference_data() {
        let repo = CatalogRepositoryImpl::new(seeded_pool().await);

        let types = repo.find_all_material_types().await.unwrap();
        let loan_periods: Vec<(&str, i32)> = types
            .iter()
            .map(|t| (t.name.as_str(), t.checkout_days))
            .collect();
        assert_eq!(loan_periods, vec![("Book", 14), ("CD", 7), ("DVD", 10)]);

        let genres = repo.find_all_genres().await.unwrap();
        assert_eq!(genres.len(), 5);
        assert_eq!(genres[0].name, "Fiction");
    }
}
