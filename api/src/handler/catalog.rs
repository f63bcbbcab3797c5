use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::catalog::{GenresResponse, MaterialTypesResponse};

pub async fn show_material_type_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MaterialTypesResponse>> {
    registry
        .catalog_repository()
        .find_all_material_types()
        .await
        .map(MaterialTypesResponse::from)
        .map(Json)
}

pub async fn show_genre_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GenresResponse>> {
    registry
        .catalog_repository()
        .find_all_genres()
        .await
        .map(GenresResponse::from)
        .map(Json)
}
