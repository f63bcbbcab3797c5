pub mod catalog;
pub mod checkout;
pub mod material;
pub mod patron;
