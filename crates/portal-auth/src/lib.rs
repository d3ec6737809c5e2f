//! Intern Portal Authentication and Authorization
//!
//! This crate provides JWT-based authentication and role-based
//! access control for the intern portal.

pub mod authz;
pub mod error;
pub mod jwt;
pub mod password;

pub use authz::{authorize, AuthUser, INTERN_VIEWER_ROLES};
pub use error::AuthError;
pub use jwt::{extract_bearer_token, Claims, JwtManager};
pub use password::{hash_password, verify_password};
