pub mod address;
pub mod units;
