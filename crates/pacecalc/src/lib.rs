//! PaceCalc library: application logic for the pace calculator.

pub mod app;
pub mod config;
pub mod errors;
