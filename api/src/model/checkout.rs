use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    checkout::{Checkout, CheckoutMaterial, OverdueCheckout},
    id::{CheckoutId, MaterialId, PatronId},
    patron::CheckoutPatron,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::MaterialTypeResponse;

// 貸出日はサーバ側で決めるので、リクエストに含まれていても読まない
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    #[garde(range(min = 1))]
    pub material_id: i64,
    #[garde(range(min = 1))]
    pub patron_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub id: CheckoutId,
    pub material_id: MaterialId,
    pub material: CheckoutMaterialResponse,
    pub patron_id: PatronId,
    pub patron: CheckoutPatronResponse,
    pub checkout_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub paid: bool,
    // 延滞していなければ null
    pub late_fee: Option<Decimal>,
}

impl CheckoutResponse {
    pub fn new(checkout: Checkout, today: NaiveDate) -> Self {
        let late_fee = checkout.late_fee(today);
        Self::with_late_fee(checkout, late_fee)
    }

    fn with_late_fee(checkout: Checkout, late_fee: Option<Decimal>) -> Self {
        let due_date = checkout.due_date();
        let Checkout {
            id,
            material,
            patron,
            checkout_date,
            return_date,
            paid,
        } = checkout;
        Self {
            id,
            material_id: material.id,
            material: material.into(),
            patron_id: patron.id,
            patron: patron.into(),
            checkout_date,
            due_date,
            return_date,
            paid,
            late_fee,
        }
    }
}

impl From<OverdueCheckout> for CheckoutResponse {
    fn from(value: OverdueCheckout) -> Self {
        Self::with_late_fee(value.checkout, Some(value.late_fee))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutsResponse {
    pub items: Vec<CheckoutResponse>,
}

impl CheckoutsResponse {
    pub fn new(checkouts: Vec<Checkout>, today: NaiveDate) -> Self {
        Self {
            items: checkouts
                .into_iter()
                .map(|checkout| CheckoutResponse::new(checkout, today))
                .collect(),
        }
    }
}

impl From<Vec<OverdueCheckout>> for CheckoutsResponse {
    fn from(value: Vec<OverdueCheckout>) -> Self {
        Self {
            items: value.into_iter().map(CheckoutResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutMaterialResponse {
    pub id: MaterialId,
    pub name: String,
    pub material_type: MaterialTypeResponse,
}

impl From<CheckoutMaterial> for CheckoutMaterialResponse {
    fn from(value: CheckoutMaterial) -> Self {
        Self {
            id: value.id,
            name: value.name,
            material_type: value.material_type.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPatronResponse {
    pub id: PatronId,
    pub first_name: String,
    pub last_name: String,
}

impl From<CheckoutPatron> for CheckoutPatronResponse {
    fn from(value: CheckoutPatron) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}
