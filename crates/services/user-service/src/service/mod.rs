//! Application services layer - Use cases and business logic.
//!
//! The users service only knows the [`UsersRepository`](crate::repository::UsersRepository)
//! contract; [`container`] decides which backend it gets for each request.

pub mod container;
mod users_service;

pub use container::{build_users_repository, build_users_service};
pub use users_service::UsersService;
