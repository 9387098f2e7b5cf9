//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User source documents
// =============================================================================

/// Field of a source document holding the user records
pub const USERS_FIELD: &str = "users";

/// Identifier assigned to the first user of an empty store
pub const FIRST_USER_ID: i32 = 1;
