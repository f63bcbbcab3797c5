use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{GenreId, MaterialId, MaterialTypeId};

#[derive(new, Debug)]
pub struct CreateMaterial {
    pub name: String,
    pub material_type_id: MaterialTypeId,
    pub genre_id: GenreId,
}

#[derive(new, Debug)]
pub struct UpdateMaterial {
    pub material_id: MaterialId,
    pub name: String,
    pub material_type_id: MaterialTypeId,
    pub genre_id: GenreId,
}

#[derive(new, Debug)]
pub struct WithdrawMaterial {
    pub material_id: MaterialId,
    pub withdrawn_at: DateTime<Utc>,
}
