use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::{CheckoutId, MaterialId, PatronId};

// 貸出日は呼び出し側の指定ではなく、処理日の日付を使う
#[derive(new, Debug, Clone)]
pub struct CreateCheckout {
    pub material_id: MaterialId,
    pub patron_id: PatronId,
    pub checked_out_on: NaiveDate,
}

#[derive(new, Debug, Clone)]
pub struct UpdateReturned {
    pub checkout_id: CheckoutId,
    pub returned_on: NaiveDate,
}
