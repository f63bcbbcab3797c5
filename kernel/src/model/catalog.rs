use super::id::{GenreId, MaterialTypeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialType {
    pub id: MaterialTypeId,
    pub name: String,
    // 貸出期間（日数）
    pub checkout_days: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}
