pub mod args;
pub mod compute;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;
pub mod tables;

pub use compute::{NumerologyResult, evaluate, reduce};
pub use tables::NumerologySystem;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
