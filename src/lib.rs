pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod error;
pub mod models;
pub mod reorder;
pub mod store;

pub use error::{Result, TodoError};
pub use models::*;
