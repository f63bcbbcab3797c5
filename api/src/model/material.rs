use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{GenreId, MaterialId, MaterialTypeId},
    material::{
        event::{CreateMaterial, UpdateMaterial},
        Material, MaterialDetail,
    },
};
use serde::{Deserialize, Serialize};

use super::{
    catalog::{GenreResponse, MaterialTypeResponse},
    checkout::CheckoutResponse,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 1))]
    pub material_type_id: i64,
    #[garde(range(min = 1))]
    pub genre_id: i64,
}

impl From<CreateMaterialRequest> for CreateMaterial {
    fn from(value: CreateMaterialRequest) -> Self {
        let CreateMaterialRequest {
            name,
            material_type_id,
            genre_id,
        } = value;
        CreateMaterial::new(
            name,
            MaterialTypeId::new(material_type_id),
            GenreId::new(genre_id),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 1))]
    pub material_type_id: i64,
    #[garde(range(min = 1))]
    pub genre_id: i64,
}

#[derive(new)]
pub struct UpdateMaterialRequestWithId(MaterialId, UpdateMaterialRequest);

impl From<UpdateMaterialRequestWithId> for UpdateMaterial {
    fn from(value: UpdateMaterialRequestWithId) -> Self {
        let UpdateMaterialRequestWithId(
            material_id,
            UpdateMaterialRequest {
                name,
                material_type_id,
                genre_id,
            },
        ) = value;
        UpdateMaterial::new(
            material_id,
            name,
            MaterialTypeId::new(material_type_id),
            GenreId::new(genre_id),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    pub id: MaterialId,
    pub name: String,
    pub material_type_id: MaterialTypeId,
    pub material_type: MaterialTypeResponse,
    pub genre_id: GenreId,
    pub genre: GenreResponse,
    pub withdrawn_since: Option<DateTime<Utc>>,
}

impl From<Material> for MaterialResponse {
    fn from(value: Material) -> Self {
        let Material {
            id,
            name,
            material_type,
            genre,
            withdrawn_since,
        } = value;
        Self {
            id,
            name,
            material_type_id: material_type.id,
            material_type: material_type.into(),
            genre_id: genre.id,
            genre: genre.into(),
            withdrawn_since,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsResponse {
    pub items: Vec<MaterialResponse>,
}

impl From<Vec<Material>> for MaterialsResponse {
    fn from(value: Vec<Material>) -> Self {
        Self {
            items: value.into_iter().map(MaterialResponse::from).collect(),
        }
    }
}

// 資料の詳細。貸出履歴と、それぞれの延滞料を含む
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDetailResponse {
    #[serde(flatten)]
    pub material: MaterialResponse,
    pub checkouts: Vec<CheckoutResponse>,
}

impl MaterialDetailResponse {
    pub fn new(detail: MaterialDetail, today: NaiveDate) -> Self {
        let MaterialDetail {
            material,
            checkouts,
        } = detail;
        Self {
            material: material.into(),
            checkouts: checkouts
                .into_iter()
                .map(|checkout| CheckoutResponse::new(checkout, today))
                .collect(),
        }
    }
}
