pub use super::prices::Entity as Prices;
pub use super::sales::Entity as Sales;
pub use super::users::Entity as Users;
