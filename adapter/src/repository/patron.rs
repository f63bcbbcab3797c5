use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::PatronId,
        patron::{
            event::{CreatePatron, DeactivatePatron, UpdatePatron},
            Patron,
        },
    },
    repository::patron::PatronRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::patron::PatronRow, ConnectionPool};

#[derive(new)]
pub struct PatronRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PatronRepository for PatronRepositoryImpl {
    async fn create(&self, event: CreatePatron) -> AppResult<PatronId> {
        let res = sqlx::query(
            r#"
                INSERT INTO patrons (first_name, last_name, email, address, is_active)
                VALUES (?, ?, ?, ?, TRUE)
            "#,
        )
        .bind(event.first_name)
        .bind(event.last_name)
        .bind(event.email)
        .bind(event.address)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(PatronId::new(res.last_insert_rowid()))
    }

    async fn find_all(&self) -> AppResult<Vec<Patron>> {
        let rows: Vec<PatronRow> = sqlx::query_as(
            r#"
                SELECT patron_id, first_name, last_name, email, address, is_active
                FROM patrons
                ORDER BY patron_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Patron::from).collect())
    }

    async fn find_by_id(&self, patron_id: PatronId) -> AppResult<Option<Patron>> {
        let row: Option<PatronRow> = sqlx::query_as(
            r#"
                SELECT patron_id, first_name, last_name, email, address, is_active
                FROM patrons
                WHERE patron_id = ?
            "#,
        )
        .bind(patron_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Patron::from))
    }

    async fn update(&self, event: UpdatePatron) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE patrons
                SET email = ?, address = ?
                WHERE patron_id = ?
            "#,
        )
        .bind(event.email)
        .bind(event.address)
        .bind(event.patron_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "利用者（{}）が見つかりませんでした。",
                event.patron_id
            )));
        }
        Ok(())
    }

    async fn deactivate(&self, event: DeactivatePatron) -> AppResult<()> {
        let res = sqlx::query("UPDATE patrons SET is_active = FALSE WHERE patron_id = ?")
            .bind(event.patron_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "利用者（{}）が見つかりませんでした。",
                event.patron_id
            )));
        }
        tracing::info!(patron.id = %event.patron_id, "patron deactivated");
        Ok(())
    }
}
