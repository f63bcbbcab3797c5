use chrono::NaiveDate;
use kernel::model::{
    catalog::MaterialType,
    checkout::{Checkout, CheckoutMaterial},
    id::{CheckoutId, MaterialId, MaterialTypeId, PatronId},
    patron::CheckoutPatron,
};

// checkouts に資料・資料種別・利用者を結合した行
#[derive(sqlx::FromRow)]
pub struct CheckoutRow {
    pub checkout_id: CheckoutId,
    pub material_id: MaterialId,
    pub material_name: String,
    pub material_type_id: MaterialTypeId,
    pub material_type_name: String,
    pub checkout_days: i32,
    pub patron_id: PatronId,
    pub first_name: String,
    pub last_name: String,
    pub checkout_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub paid: bool,
}

impl From<CheckoutRow> for Checkout {
    fn from(value: CheckoutRow) -> Self {
        let CheckoutRow {
            checkout_id,
            material_id,
            material_name,
            material_type_id,
            material_type_name,
            checkout_days,
            patron_id,
            first_name,
            last_name,
            checkout_date,
            return_date,
            paid,
        } = value;
        Checkout {
            id: checkout_id,
            material: CheckoutMaterial {
                id: material_id,
                name: material_name,
                material_type: MaterialType {
                    id: material_type_id,
                    name: material_type_name,
                    checkout_days,
                },
            },
            patron: CheckoutPatron {
                id: patron_id,
                first_name,
                last_name,
            },
            checkout_date,
            return_date,
            paid,
        }
    }
}
