use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::PatronId,
    patron::{event::DeactivatePatron, PatronDetail},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::today;
use crate::model::patron::{
    CreatePatronRequest, PatronDetailResponse, PatronResponse, PatronsResponse,
    UpdatePatronRequest, UpdatePatronRequestWithId,
};

pub async fn register_patron(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePatronRequest>,
) -> AppResult<(StatusCode, Json<PatronResponse>)> {
    req.validate()?;

    let patron_repository = registry.patron_repository();
    let patron_id = patron_repository.create(req.into()).await?;
    patron_repository
        .find_by_id(patron_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("利用者（{patron_id}）が見つかりませんでした。"))
        })
        .map(|patron| (StatusCode::CREATED, Json(patron.into())))
}

pub async fn show_patron_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PatronsResponse>> {
    registry
        .patron_repository()
        .find_all()
        .await
        .map(PatronsResponse::from)
        .map(Json)
}

pub async fn show_patron(
    Path(patron_id): Path<PatronId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PatronDetailResponse>> {
    let patron = registry
        .patron_repository()
        .find_by_id(patron_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("利用者（{patron_id}）が見つかりませんでした。"))
        })?;
    let checkouts = registry
        .checkout_repository()
        .find_history_by_patron_id(patron_id)
        .await?;

    Ok(Json(PatronDetailResponse::new(
        PatronDetail { patron, checkouts },
        today(),
    )))
}

pub async fn update_patron(
    Path(patron_id): Path<PatronId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePatronRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    let update = UpdatePatronRequestWithId::new(patron_id, req);
    registry
        .patron_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn deactivate_patron(
    Path(patron_id): Path<PatronId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .patron_repository()
        .deactivate(DeactivatePatron::new(patron_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
