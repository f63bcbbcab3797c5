use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::PatronId,
    patron::{
        event::{CreatePatron, DeactivatePatron, UpdatePatron},
        Patron,
    },
};

#[mockall::automock]
#[async_trait]
pub trait PatronRepository: Send + Sync {
    async fn create(&self, event: CreatePatron) -> AppResult<PatronId>;
    async fn find_all(&self) -> AppResult<Vec<Patron>>;
    async fn find_by_id(&self, patron_id: PatronId) -> AppResult<Option<Patron>>;
    async fn update(&self, event: UpdatePatron) -> AppResult<()>;
    async fn deactivate(&self, event: DeactivatePatron) -> AppResult<()>;
}
