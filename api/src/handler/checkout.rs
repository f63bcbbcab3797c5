use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{CheckoutId, MaterialId, PatronId};
use registry::AppRegistry;
use shared::error::AppResult;

use super::today;
use crate::model::checkout::{CheckoutResponse, CheckoutsResponse, CreateCheckoutRequest};

pub async fn checkout_material(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCheckoutRequest>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    req.validate()?;

    let today = today();
    registry
        .checkout_service()
        .create_checkout(
            MaterialId::new(req.material_id),
            PatronId::new(req.patron_id),
            today,
        )
        .await
        .map(|checkout| {
            (
                StatusCode::CREATED,
                Json(CheckoutResponse::new(checkout, today)),
            )
        })
}

pub async fn return_material(
    Path(checkout_id): Path<CheckoutId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutResponse>> {
    let today = today();
    registry
        .checkout_service()
        .return_checkout(checkout_id, today)
        .await
        .map(|checkout| Json(CheckoutResponse::new(checkout, today)))
}

pub async fn show_checkout(
    Path(checkout_id): Path<CheckoutId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutResponse>> {
    registry
        .checkout_service()
        .find_checkout(checkout_id)
        .await
        .map(|checkout| Json(CheckoutResponse::new(checkout, today())))
}

pub async fn show_unreturned_checkout_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutsResponse>> {
    registry
        .checkout_repository()
        .find_unreturned_all()
        .await
        .map(|checkouts| Json(CheckoutsResponse::new(checkouts, today())))
}

pub async fn show_overdue_checkout_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckoutsResponse>> {
    registry
        .checkout_service()
        .list_overdue_checkouts(today())
        .await
        .map(CheckoutsResponse::from)
        .map(Json)
}

pub async fn delete_checkout(
    Path(checkout_id): Path<CheckoutId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .checkout_service()
        .remove_checkout(checkout_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
