pub mod prelude;

pub mod prices;
pub mod sales;
pub mod users;
