use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::MaterialId,
        material::{
            event::{CreateMaterial, UpdateMaterial, WithdrawMaterial},
            Material,
        },
    },
    repository::material::MaterialRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{map_write_error, model::material::MaterialRow, ConnectionPool};

const SELECT_MATERIALS: &str = r#"
    SELECT
        m.material_id,
        m.name,
        mt.material_type_id,
        mt.name AS material_type_name,
        mt.checkout_days,
        g.genre_id,
        g.name AS genre_name,
        m.withdrawn_since
    FROM materials AS m
    INNER JOIN material_types AS mt ON mt.material_type_id = m.material_type_id
    INNER JOIN genres AS g ON g.genre_id = m.genre_id
"#;

#[derive(new)]
pub struct MaterialRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MaterialRepository for MaterialRepositoryImpl {
    async fn create(&self, event: CreateMaterial) -> AppResult<MaterialId> {
        let res = sqlx::query(
            r#"
                INSERT INTO materials (name, material_type_id, genre_id, withdrawn_since)
                VALUES (?, ?, ?, NULL)
            "#,
        )
        .bind(&event.name)
        .bind(event.material_type_id)
        .bind(event.genre_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!(
                    "資料種別（{}）またはジャンル（{}）が存在しません。",
                    event.material_type_id, event.genre_id
                )
            })
        })?;

        Ok(MaterialId::new(res.last_insert_rowid()))
    }

    async fn find_in_circulation(&self) -> AppResult<Vec<Material>> {
        let sql = format!(
            "{SELECT_MATERIALS} WHERE m.withdrawn_since IS NULL ORDER BY m.material_id ASC"
        );
        let rows: Vec<MaterialRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Material::from).collect())
    }

    async fn find_by_id(&self, material_id: MaterialId) -> AppResult<Option<Material>> {
        let sql = format!("{SELECT_MATERIALS} WHERE m.material_id = ?");
        let row: Option<MaterialRow> = sqlx::query_as(&sql)
            .bind(material_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Material::from))
    }

    async fn update(&self, event: UpdateMaterial) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE materials
                SET name = ?, material_type_id = ?, genre_id = ?
                WHERE material_id = ?
            "#,
        )
        .bind(&event.name)
        .bind(event.material_type_id)
        .bind(event.genre_id)
        .bind(event.material_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!(
                    "資料種別（{}）またはジャンル（{}）が存在しません。",
                    event.material_type_id, event.genre_id
                )
            })
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "資料（{}）が見つかりませんでした。",
                event.material_id
            )));
        }
        Ok(())
    }

    async fn withdraw(&self, event: WithdrawMaterial) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        // 対象の資料が存在するかを確認する
        let exists: Option<(MaterialId,)> =
            sqlx::query_as("SELECT material_id FROM materials WHERE material_id = ?")
                .bind(event.material_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "資料（{}）が見つかりませんでした。",
                event.material_id
            )));
        }

        // すでに除籍済みの場合は最初の除籍日時を残す
        sqlx::query(
            r#"
                UPDATE materials
                SET withdrawn_since = COALESCE(withdrawn_since, ?)
                WHERE material_id = ?
            "#,
        )
        .bind(event.withdrawn_at)
        .bind(event.material_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(material.id = %event.material_id, "material withdrawn");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seeded_pool;
    use chrono::{TimeZone, Utc};
    use kernel::model::id::{GenreId, MaterialTypeId};

    #[tokio::test]
    async fn find_in_circulation_excludes_withdrawn() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);

        let materials = repo.find_in_circulation().await.unwrap();
        let ids: Vec<i64> = materials.iter().map(|m| m.id.raw()).collect();
        assert_eq!(ids, vec![2, 3, 4, 7]);
        assert!(materials.iter().all(|m| !m.is_withdrawn()));
    }

    #[tokio::test]
    async fn find_by_id_joins_type_and_genre() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);

        let material = repo.find_by_id(MaterialId::new(7)).await.unwrap().unwrap();
        assert_eq!(material.name, "The Dark Side of the Moon");
        assert_eq!(material.material_type.name, "CD");
        assert_eq!(material.material_type.checkout_days, 7);
        assert_eq!(material.genre.name, "Classics");

        let withdrawn = repo.find_by_id(MaterialId::new(1)).await.unwrap().unwrap();
        assert!(withdrawn.is_withdrawn());

        assert!(repo.find_by_id(MaterialId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_rejects_unknown_material_type() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);

        let result = repo
            .create(CreateMaterial::new(
                "Dune".into(),
                MaterialTypeId::new(99),
                GenreId::new(1),
            ))
            .await;
        assert!(matches!(result, Err(AppError::InvalidReference(_))));

        let id = repo
            .create(CreateMaterial::new(
                "Dune".into(),
                MaterialTypeId::new(1),
                GenreId::new(4),
            ))
            .await
            .unwrap();
        let created = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(created.name, "Dune");
        assert!(!created.is_withdrawn());
    }

    #[tokio::test]
    async fn update_replaces_name_type_and_genre() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);

        repo.update(UpdateMaterial::new(
            MaterialId::new(3),
            "Nineteen Eighty-Four".into(),
            MaterialTypeId::new(2),
            GenreId::new(2),
        ))
        .await
        .unwrap();
        let material = repo.find_by_id(MaterialId::new(3)).await.unwrap().unwrap();
        assert_eq!(material.name, "Nineteen Eighty-Four");
        assert_eq!(material.material_type.name, "CD");
        assert_eq!(material.genre.name, "Classics");
        assert!(!material.is_withdrawn());

        let unknown_genre = repo
            .update(UpdateMaterial::new(
                MaterialId::new(3),
                "1984".into(),
                MaterialTypeId::new(1),
                GenreId::new(99),
            ))
            .await;
        assert!(matches!(unknown_genre, Err(AppError::InvalidReference(_))));

        let missing = repo
            .update(UpdateMaterial::new(
                MaterialId::new(999),
                "1984".into(),
                MaterialTypeId::new(1),
                GenreId::new(1),
            ))
            .await;
        assert!(matches!(missing, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn withdraw_keeps_first_timestamp() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        repo.withdraw(WithdrawMaterial::new(MaterialId::new(2), first))
            .await
            .unwrap();
        repo.withdraw(WithdrawMaterial::new(MaterialId::new(2), second))
            .await
            .unwrap();

        let material = repo.find_by_id(MaterialId::new(2)).await.unwrap().unwrap();
        assert_eq!(material.withdrawn_since, Some(first));
    }

    #[tokio::test]
    async fn withdraw_unknown_material_is_not_found() {
        let repo = MaterialRepositoryImpl::new(seeded_pool().await);

        let result = repo
            .withdraw(WithdrawMaterial::new(MaterialId::new(999), Utc::now()))
            .await;
        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }
}
