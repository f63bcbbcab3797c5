use kernel::model::{
    catalog::{Genre, MaterialType},
    id::{GenreId, MaterialTypeId},
};

#[derive(sqlx::FromRow)]
pub struct MaterialTypeRow {
    pub material_type_id: MaterialTypeId,
    pub name: String,
    pub checkout_days: i32,
}

impl From<MaterialTypeRow> for MaterialType {
    fn from(value: MaterialTypeRow) -> Self {
        let MaterialTypeRow {
            material_type_id,
            name,
            checkout_days,
        } = value;
        MaterialType {
            id: material_type_id,
            name,
            checkout_days,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct GenreRow {
    pub genre_id: GenreId,
    pub name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        Genre {
            id: value.genre_id,
            name: value.name,
        }
    }
}
