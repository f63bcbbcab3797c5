use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        checkout::{
            event::{CreateCheckout, UpdateReturned},
            Checkout,
        },
        id::{CheckoutId, MaterialId, PatronId},
    },
    repository::checkout::CheckoutRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation, map_write_error, model::checkout::CheckoutRow, ConnectionPool,
};

// 延滞料の計算に資料種別の貸出日数が要るので、資料種別まで結合して取得する
const SELECT_CHECKOUTS: &str = r#"
    SELECT
        c.checkout_id,
        m.material_id,
        m.name AS material_name,
        mt.material_type_id,
        mt.name AS material_type_name,
        mt.checkout_days,
        p.patron_id,
        p.first_name,
        p.last_name,
        c.checkout_date,
        c.return_date,
        c.paid
    FROM checkouts AS c
    INNER JOIN materials AS m ON m.material_id = c.material_id
    INNER JOIN material_types AS mt ON mt.material_type_id = m.material_type_id
    INNER JOIN patrons AS p ON p.patron_id = c.patron_id
"#;

#[derive(new)]
pub struct CheckoutRepositoryImpl {
    db: ConnectionPool,
}

impl CheckoutRepositoryImpl {
    async fn find_where(&self, condition: &str, id: i64) -> AppResult<Vec<Checkout>> {
        let sql = format!("{SELECT_CHECKOUTS} WHERE {condition} ORDER BY c.checkout_id ASC");
        let rows: Vec<CheckoutRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Checkout::from).collect())
    }
}

#[async_trait]
impl CheckoutRepository for CheckoutRepositoryImpl {
    async fn create(&self, event: CreateCheckout) -> AppResult<CheckoutId> {
        let res = sqlx::query(
            r#"
                INSERT INTO checkouts (material_id, patron_id, checkout_date, return_date, paid)
                VALUES (?, ?, ?, NULL, FALSE)
            "#,
        )
        .bind(event.material_id)
        .bind(event.patron_id)
        .bind(event.checked_out_on)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            // 未返却の貸出が既にある資料は一意制約で弾かれる
            if is_unique_violation(&e) {
                return AppError::UnprocessableEntity(format!(
                    "資料（{}）は貸出中です。",
                    event.material_id
                ));
            }
            map_write_error(e, || {
                format!(
                    "資料（{}）または利用者（{}）が存在しません。",
                    event.material_id, event.patron_id
                )
            })
        })?;

        Ok(CheckoutId::new(res.last_insert_rowid()))
    }

    async fn update_returned(&self, event: UpdateReturned) -> AppResult<()> {
        // 未返却の行だけを更新するので、同時に返却されても返却日は上書きされない
        let res = sqlx::query(
            r#"
                UPDATE checkouts
                SET return_date = ?
                WHERE checkout_id = ? AND return_date IS NULL
            "#,
        )
        .bind(event.returned_on)
        .bind(event.checkout_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // 更新対象が無いのは、返却済みか、行そのものが削除されたかのどちらか
            let exists: Option<(CheckoutId,)> =
                sqlx::query_as("SELECT checkout_id FROM checkouts WHERE checkout_id = ?")
                    .bind(event.checkout_id)
                    .fetch_optional(self.db.inner_ref())
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            return Err(match exists {
                Some(_) => AppError::UnprocessableEntity(format!(
                    "貸出（{}）は返却済みです。",
                    event.checkout_id
                )),
                None => AppError::EntityNotFound(format!(
                    "貸出（{}）が見つかりませんでした。",
                    event.checkout_id
                )),
            });
        }
        Ok(())
    }

    async fn find_by_id(&self, checkout_id: CheckoutId) -> AppResult<Option<Checkout>> {
        let sql = format!("{SELECT_CHECKOUTS} WHERE c.checkout_id = ?");
        let row: Option<CheckoutRow> = sqlx::query_as(&sql)
            .bind(checkout_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Checkout::from))
    }

    async fn find_unreturned_all(&self) -> AppResult<Vec<Checkout>> {
        let sql =
            format!("{SELECT_CHECKOUTS} WHERE c.return_date IS NULL ORDER BY c.checkout_id ASC");
        let rows: Vec<CheckoutRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Checkout::from).collect())
    }

    async fn find_history_by_patron_id(&self, patron_id: PatronId) -> AppResult<Vec<Checkout>> {
        self.find_where("c.patron_id = ?", patron_id.raw()).await
    }

    async fn find_history_by_material_id(
        &self,
        material_id: MaterialId,
    ) -> AppResult<Vec<Checkout>> {
        self.find_where("c.material_id = ?", material_id.raw()).await
    }

    async fn delete(&self, checkout_id: CheckoutId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM checkouts WHERE checkout_id = ?")
            .bind(checkout_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "貸出（{checkout_id}）が見つかりませんでした。"
            )));
        }
        Ok(())
    }
}
