use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    checkout::{
        event::{CreateCheckout, UpdateReturned},
        Checkout,
    },
    id::{CheckoutId, MaterialId, PatronId},
};

#[mockall::automock]
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    // 貸出操作。採番された貸出 ID を返す
    async fn create(&self, event: CreateCheckout) -> AppResult<CheckoutId>;
    // 返却操作。未返却の貸出のみ更新する
    async fn update_returned(&self, event: UpdateReturned) -> AppResult<()>;
    async fn find_by_id(&self, checkout_id: CheckoutId) -> AppResult<Option<Checkout>>;
    // すべての未返却の貸出情報を取得する
    async fn find_unreturned_all(&self) -> AppResult<Vec<Checkout>>;
    // 利用者に紐づく貸出履歴（返却済みも含む）
    async fn find_history_by_patron_id(&self, patron_id: PatronId) -> AppResult<Vec<Checkout>>;
    // 資料の貸出履歴（返却済みも含む）
    async fn find_history_by_material_id(
        &self,
        material_id: MaterialId,
    ) -> AppResult<Vec<Checkout>>;
    // 管理者による訂正用の削除
    async fn delete(&self, checkout_id: CheckoutId) -> AppResult<()>;
}
