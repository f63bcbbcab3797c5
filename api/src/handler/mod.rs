use chrono::{Local, NaiveDate};

pub mod catalog;
pub mod checkout;
pub mod health;
pub mod material;
pub mod patron;

// 時計を読むのはハンドラだけ。以降の処理には日付を引数で渡す
fn today() -> NaiveDate {
    Local::now().date_naive()
}
