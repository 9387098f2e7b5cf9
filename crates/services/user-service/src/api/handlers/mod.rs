//! HTTP request handlers.

mod health_handler;
mod users_handler;

pub use health_handler::health;
pub use users_handler::{create_user, get_user, list_users, user_routes};
