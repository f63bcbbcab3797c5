use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::MaterialId,
    material::{
        event::{CreateMaterial, UpdateMaterial, WithdrawMaterial},
        Material,
    },
};

#[mockall::automock]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create(&self, event: CreateMaterial) -> AppResult<MaterialId>;
    // 除籍されていない資料のみを返す
    async fn find_in_circulation(&self) -> AppResult<Vec<Material>>;
    async fn find_by_id(&self, material_id: MaterialId) -> AppResult<Option<Material>>;
    async fn update(&self, event: UpdateMaterial) -> AppResult<()>;
    // 除籍日時が未設定のときだけ記録する。一度除籍した資料は戻せない
    async fn withdraw(&self, event: WithdrawMaterial) -> AppResult<()>;
}
