use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::MaterialId,
    material::{event::WithdrawMaterial, MaterialDetail},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::today;
use crate::model::material::{
    CreateMaterialRequest, MaterialDetailResponse, MaterialResponse, MaterialsResponse,
    UpdateMaterialRequest, UpdateMaterialRequestWithId,
};

pub async fn register_material(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMaterialRequest>,
) -> AppResult<(StatusCode, Json<MaterialResponse>)> {
    req.validate()?;

    let material_repository = registry.material_repository();
    let material_id = material_repository.create(req.into()).await?;
    material_repository
        .find_by_id(material_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("資料（{material_id}）が見つかりませんでした。"))
        })
        .map(|material| (StatusCode::CREATED, Json(material.into())))
}

// 除籍済みの資料は含めない
pub async fn show_material_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MaterialsResponse>> {
    registry
        .material_repository()
        .find_in_circulation()
        .await
        .map(MaterialsResponse::from)
        .map(Json)
}

pub async fn show_available_material_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MaterialsResponse>> {
    registry
        .checkout_service()
        .list_available_materials()
        .await
        .map(MaterialsResponse::from)
        .map(Json)
}

pub async fn show_material(
    Path(material_id): Path<MaterialId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MaterialDetailResponse>> {
    let material = registry
        .material_repository()
        .find_by_id(material_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("資料（{material_id}）が見つかりませんでした。"))
        })?;
    let checkouts = registry
        .checkout_repository()
        .find_history_by_material_id(material_id)
        .await?;

    Ok(Json(MaterialDetailResponse::new(
        MaterialDetail {
            material,
            checkouts,
        },
        today(),
    )))
}

pub async fn update_material(
    Path(material_id): Path<MaterialId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateMaterialRequest>,
) -> AppResult<StatusCode> {
    req.validate()?;

    let update = UpdateMaterialRequestWithId::new(material_id, req);
    registry
        .material_repository()
        .update(update.into())
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn withdraw_material(
    Path(material_id): Path<MaterialId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .material_repository()
        .withdraw(WithdrawMaterial::new(material_id, Utc::now()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
