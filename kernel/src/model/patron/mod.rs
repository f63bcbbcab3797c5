use super::{checkout::Checkout, id::PatronId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patron {
    pub id: PatronId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    // false の利用者は貸出停止中
    pub is_active: bool,
}

#[derive(Debug)]
pub struct PatronDetail {
    pub patron: Patron,
    pub checkouts: Vec<Checkout>,
}

// 貸出情報に埋め込む利用者の概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPatron {
    pub id: PatronId,
    pub first_name: String,
    pub last_name: String,
}
