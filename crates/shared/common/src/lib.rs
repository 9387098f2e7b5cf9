//! Common utilities shared across the workspace.
//!
//! This crate provides unified error handling with HTTP response conversion.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
