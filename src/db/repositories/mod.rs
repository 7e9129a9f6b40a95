pub mod catalog;
pub mod sales;
pub mod user;
