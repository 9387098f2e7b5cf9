//! Repository layer for data access.
//!
//! Two interchangeable backends implement [`UsersRepository`]:
//! [`FakeUsersRepository`] (JSON file loaded into memory) and
//! [`SqlUsersRepository`] (relational `users` table). [`UsersStore`] is the
//! tagged union the selector hands out.

pub mod entities;
mod fake_users_repository;
mod sql_users_repository;
mod store;
mod users_repository;

pub use fake_users_repository::FakeUsersRepository;
pub use sql_users_repository::SqlUsersRepository;
pub use store::UsersStore;
pub use users_repository::UsersRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use users_repository::MockUsersRepository;
