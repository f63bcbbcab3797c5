use std::{collections::HashSet, sync::Arc};

use chrono::NaiveDate;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        checkout::{
            event::{CreateCheckout, UpdateReturned},
            Checkout, OverdueCheckout,
        },
        id::{CheckoutId, MaterialId, PatronId},
        material::Material,
    },
    repository::{
        checkout::CheckoutRepository, material::MaterialRepository, patron::PatronRepository,
    },
};

// 貸出・返却と延滞の判定をまとめたサービス。
// 日付はすべて呼び出し側から受け取り、内部で時計は参照しない
#[derive(new, Clone)]
pub struct CheckoutService {
    material_repository: Arc<dyn MaterialRepository>,
    patron_repository: Arc<dyn PatronRepository>,
    checkout_repository: Arc<dyn CheckoutRepository>,
}

impl CheckoutService {
    pub async fn create_checkout(
        &self,
        material_id: MaterialId,
        patron_id: PatronId,
        today: NaiveDate,
    ) -> AppResult<Checkout> {
        let material = self
            .material_repository
            .find_by_id(material_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference(format!(
                    "資料（{material_id}）が見つかりませんでした。"
                ))
            })?;
        let patron = self
            .patron_repository
            .find_by_id(patron_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference(format!(
                    "利用者（{patron_id}）が見つかりませんでした。"
                ))
            })?;

        if !patron.is_active {
            return Err(AppError::UnprocessableEntity(format!(
                "利用者（{patron_id}）は貸出停止中です。"
            )));
        }
        if material.is_withdrawn() {
            return Err(AppError::UnprocessableEntity(format!(
                "資料（{material_id}）は除籍済みです。"
            )));
        }
        let already_checked_out = self
            .checkout_repository
            .find_history_by_material_id(material_id)
            .await?
            .iter()
            .any(Checkout::is_outstanding);
        if already_checked_out {
            return Err(AppError::UnprocessableEntity(format!(
                "資料（{material_id}）は貸出中です。"
            )));
        }

        let checkout_id = self
            .checkout_repository
            .create(CreateCheckout::new(material_id, patron_id, today))
            .await?;
        tracing::info!(
            checkout.id = %checkout_id,
            material.id = %material_id,
            patron.id = %patron_id,
            "material checked out"
        );

        self.find_checkout(checkout_id).await
    }

    // 返却済みの貸出を再度返却しようとした場合は返却日を上書きせずに拒否する
    pub async fn return_checkout(
        &self,
        checkout_id: CheckoutId,
        today: NaiveDate,
    ) -> AppResult<Checkout> {
        let checkout = self.find_checkout(checkout_id).await?;
        if !checkout.is_outstanding() {
            return Err(AppError::UnprocessableEntity(format!(
                "貸出（{checkout_id}）は返却済みです。"
            )));
        }

        self.checkout_repository
            .update_returned(UpdateReturned::new(checkout_id, today))
            .await?;
        tracing::info!(checkout.id = %checkout_id, "material returned");

        self.find_checkout(checkout_id).await
    }

    pub async fn find_checkout(&self, checkout_id: CheckoutId) -> AppResult<Checkout> {
        self.checkout_repository
            .find_by_id(checkout_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("貸出（{checkout_id}）が見つかりませんでした。"))
            })
    }

    pub async fn remove_checkout(&self, checkout_id: CheckoutId) -> AppResult<()> {
        self.checkout_repository.delete(checkout_id).await?;
        tracing::info!(checkout.id = %checkout_id, "checkout removed");
        Ok(())
    }

    // 除籍されておらず、未返却の貸出がない資料を資料 ID 順で返す
    pub async fn list_available_materials(&self) -> AppResult<Vec<Material>> {
        let checked_out: HashSet<MaterialId> = self
            .checkout_repository
            .find_unreturned_all()
            .await?
            .into_iter()
            .map(|checkout| checkout.material.id)
            .collect();

        let mut materials: Vec<Material> = self
            .material_repository
            .find_in_circulation()
            .await?
            .into_iter()
            .filter(|material| !material.is_withdrawn() && !checked_out.contains(&material.id))
            .collect();
        materials.sort_by_key(|material| material.id);
        Ok(materials)
    }

    // 延滞中の貸出を延滞料付きで貸出 ID 順に返す
    pub async fn list_overdue_checkouts(&self, today: NaiveDate) -> AppResult<Vec<OverdueCheckout>> {
        let mut overdue: Vec<OverdueCheckout> = self
            .checkout_repository
            .find_unreturned_all()
            .await?
            .into_iter()
            .filter(|checkout| checkout.is_overdue(today))
            .filter_map(|checkout| {
                let late_fee = checkout.late_fee(today)?;
                Some(OverdueCheckout { checkout, late_fee })
            })
            .collect();
        overdue.sort_by_key(|o| o.checkout.id);
        Ok(overdue)
    }
}
