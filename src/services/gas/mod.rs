mod estimation;
pub use estimation::*;

mod fee_market;
pub use fee_market::*;
