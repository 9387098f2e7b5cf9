//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The users service and its storage backends share these types.

pub mod constants;
pub mod error;
pub mod factory;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use factory::UsersFactory;
pub use user::{User, UserCreate};
