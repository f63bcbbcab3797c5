use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    catalog::MaterialType,
    id::{CheckoutId, MaterialId},
    patron::CheckoutPatron,
};

pub mod event;
pub mod fee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub id: CheckoutId,
    pub material: CheckoutMaterial,
    pub patron: CheckoutPatron,
    pub checkout_date: NaiveDate,
    // None の間は未返却
    pub return_date: Option<NaiveDate>,
    pub paid: bool,
}

// 延滞料の計算に必要なので資料種別まで含めて持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMaterial {
    pub id: MaterialId,
    pub name: String,
    pub material_type: MaterialType,
}

impl Checkout {
    pub fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        fee::due_date(self.checkout_date, self.material.material_type.checkout_days)
    }

    pub fn late_fee(&self, today: NaiveDate) -> Option<Decimal> {
        fee::compute_late_fee(
            Some(self.checkout_date),
            self.return_date,
            Some(self.material.material_type.checkout_days),
            today,
        )
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_outstanding()
            && fee::days_late(
                self.checkout_date,
                None,
                self.material.material_type.checkout_days,
                today,
            )
            .is_some_and(|days| days > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueCheckout {
    pub checkout: Checkout,
    pub late_fee: Decimal,
}
