use kernel::model::{
    catalog::{Genre, MaterialType},
    id::{GenreId, MaterialTypeId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTypeResponse {
    pub id: MaterialTypeId,
    pub name: String,
    pub checkout_days: i32,
}

impl From<MaterialType> for MaterialTypeResponse {
    fn from(value: MaterialType) -> Self {
        let MaterialType {
            id,
            name,
            checkout_days,
        } = value;
        Self {
            id,
            name,
            checkout_days,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTypesResponse {
    pub items: Vec<MaterialTypeResponse>,
}

impl From<Vec<MaterialType>> for MaterialTypesResponse {
    fn from(value: Vec<MaterialType>) -> Self {
        Self {
            items: value.into_iter().map(MaterialTypeResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreResponse {
    pub id: GenreId,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(value: Genre) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenresResponse {
    pub items: Vec<GenreResponse>,
}

impl From<Vec<Genre>> for GenresResponse {
    fn from(value: Vec<Genre>) -> Self {
        Self {
            items: value.into_iter().map(GenreResponse::from).collect(),
        }
    }
}
