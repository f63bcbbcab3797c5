use chrono::{DateTime, Utc};

use super::{
    catalog::{Genre, MaterialType},
    checkout::Checkout,
    id::MaterialId,
};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub material_type: MaterialType,
    pub genre: Genre,
    // None なら貸出可能な資料として運用中
    pub withdrawn_since: Option<DateTime<Utc>>,
}

impl Material {
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawn_since.is_some()
    }
}

// 資料の詳細表示用。貸出履歴（返却済みも含む）を持つ
#[derive(Debug)]
pub struct MaterialDetail {
    pub material: Material,
    pub checkouts: Vec<Checkout>,
}
