pub mod calculator;
pub mod log;
pub mod not_found;
