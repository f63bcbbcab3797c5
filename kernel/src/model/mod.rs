pub mod catalog;
pub mod checkout;
pub mod id;
pub mod material;
pub mod patron;
