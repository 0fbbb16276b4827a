// Pay calculators: pure arithmetic over static federal and state tax tables.

pub mod federal;
pub mod handlers;
pub mod pay;
pub mod state;

pub use federal::FilingStatus;
pub use pay::{annualize, take_home, CalculatorError, TakeHome, TakeHomeRequest};
