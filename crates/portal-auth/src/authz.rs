//! Role-based authorization

use portal_db::AdminRole;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AuthError;
use crate::jwt::Claims;

/// Roles allowed to read intern submissions
pub const INTERN_VIEWER_ROLES: &[AdminRole] =
    &[AdminRole::Admin, AdminRole::SuperAdmin, AdminRole::Manager];

/// Authenticated admin identity, decoded from verified claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub role: AdminRole,
}

impl AuthUser {
    /// Build from verified JWT claims
    ///
    /// A token whose subject or role does not parse was not minted by this
    /// process and is treated as invalid.
    pub fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        let id = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        let role = AdminRole::from_str(&claims.role).map_err(|_| AuthError::InvalidToken)?;
        Ok(Self { id, role })
    }
}

/// Check a verified role against an endpoint's static allow-set
///
/// Pure set-membership; runs only after token verification has succeeded and
/// never re-validates the credential itself.
pub fn authorize(role: AdminRole, allowed: &[AdminRole]) -> Result<(), AuthError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AuthError::InsufficientPermissions)
    }
}
