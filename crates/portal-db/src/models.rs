//! Database models

use crate::utils::parse_datetime_or_now;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use std::fmt;
use std::str::FromStr;

/// Error type for parsing models from strings
#[derive(Debug, Clone)]
pub enum ParseError {
    InvalidAdminRole(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidAdminRole(s) => write!(f, "Invalid admin role: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Administrative role
///
/// Role strings are validated at signup time; an unknown role is rejected
/// before anything is persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
    Manager,
    Viewer,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "superadmin",
            AdminRole::Manager => "manager",
            AdminRole::Viewer => "viewer",
        }
    }
}

impl FromStr for AdminRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AdminRole::Admin),
            "superadmin" => Ok(AdminRole::SuperAdmin),
            "manager" => Ok(AdminRole::Manager),
            "viewer" => Ok(AdminRole::Viewer),
            _ => Err(ParseError::InvalidAdminRole(s.to_string())),
        }
    }
}

/// Administrative account model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    pub name: String,
    /// Stored lowercased; lookups are case-insensitive as a result
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New administrative account (for insertion)
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
}

/// Intern application model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intern {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub college: String,
    pub course: String,
    pub year_of_study: i64,
    pub skills: Vec<String>,
    pub resume_url: String,
    pub linkedin_profile: String,
    pub github_profile: String,
    pub created_at: DateTime<Utc>,
}

/// New intern application (for insertion)
#[derive(Debug, Clone)]
pub struct NewIntern {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub college: String,
    pub course: String,
    pub year_of_study: i64,
    pub skills: Vec<String>,
    pub resume_url: String,
    pub linkedin_profile: String,
    pub github_profile: String,
}

// ==================== TryFrom Implementations ====================

impl TryFrom<&sqlx::sqlite::SqliteRow> for Admin {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        let role_str: String = row.try_get("role")?;
        Ok(Admin {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role: AdminRole::from_str(&role_str).unwrap_or(AdminRole::Viewer),
            created_at: parse_datetime_or_now(&row.try_get::<String, _>("created_at")?),
            updated_at: parse_datetime_or_now(&row.try_get::<String, _>("updated_at")?),
        })
    }
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for Intern {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        let skills_json: String = row.try_get("skills")?;
        Ok(Intern {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            college: row.try_get("college")?,
            course: row.try_get("course")?,
            year_of_study: row.try_get("year_of_study")?,
            skills: serde_json::from_str(&skills_json).unwrap_or_default(),
            resume_url: row.try_get("resume_url")?,
            linkedin_profile: row.try_get("linkedin_profile")?,
            github_profile: row.try_get("github_profile")?,
            created_at: parse_datetime_or_now(&row.try_get::<String, _>("created_at")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            AdminRole::Admin,
            AdminRole::SuperAdmin,
            AdminRole::Manager,
            AdminRole::Viewer,
        ] {
            assert_eq!(AdminRole::from_str(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(AdminRole::from_str("root").is_err());
        assert!(AdminRole::from_str("").is_err());
        assert!(AdminRole::from_str("Admin").is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let admin = Admin {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: AdminRole::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
