pub mod catalog;
pub mod checkout;
pub mod health;
pub mod material;
pub mod patron;
pub mod v1;
