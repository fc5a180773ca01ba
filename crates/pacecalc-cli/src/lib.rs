//! # pacecalc-cli
//!
//! Plan presentation, terminal styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, PlanHeader, PlanPresenter, TextPresenter};
