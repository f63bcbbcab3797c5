use chrono::{DateTime, Utc};
use kernel::model::{
    catalog::{Genre, MaterialType},
    id::{GenreId, MaterialId, MaterialTypeId},
    material::Material,
};

// materials に資料種別とジャンルを結合した行
#[derive(sqlx::FromRow)]
pub struct MaterialRow {
    pub material_id: MaterialId,
    pub name: String,
    pub material_type_id: MaterialTypeId,
    pub material_type_name: String,
    pub checkout_days: i32,
    pub genre_id: GenreId,
    pub genre_name: String,
    pub withdrawn_since: Option<DateTime<Utc>>,
}

impl From<MaterialRow> for Material {
    fn from(value: MaterialRow) -> Self {
        let MaterialRow {
            material_id,
            name,
            material_type_id,
            material_type_name,
            checkout_days,
            genre_id,
            genre_name,
            withdrawn_since,
        } = value;
        Material {
            id: material_id,
            name,
            material_type: MaterialType {
                id: material_type_id,
                name: material_type_name,
                checkout_days,
            },
            genre: Genre {
                id: genre_id,
                name: genre_name,
            },
            withdrawn_since,
        }
    }
}
