pub mod earnings;
pub mod month;

pub use earnings::MonthlyEarnings;
pub use month::{InvalidMonth, Month};
