//! Request/Response DTOs for the portal API

use chrono::{DateTime, Utc};
use portal_db::{Admin, Intern};
use serde::{Deserialize, Serialize};

// ==================== Auth Types ====================

/// Signup request
///
/// Every field is optional at the serde level so that absence surfaces as a
/// 400 from the handler's validation, not a deserialization rejection.
#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Public admin profile
///
/// The password hash is structurally unrepresentable here; no code path can
/// leak it into a response.
#[derive(Serialize)]
pub struct AdminProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role.as_str().to_string(),
        }
    }
}

/// Signup response
#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: AdminProfile,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminProfile,
}

// ==================== Intern Types ====================

/// Intern submission request (public endpoint, camelCase wire format)
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInternRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<i64>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub github_profile: Option<String>,
}

/// Intern record response (camelCase wire format)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternRecord {
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

impl From<Intern> for InternRecord {
    fn from(intern: Intern) -> Self {
        Self {
            id: intern.id,
            name: intern.name,
            email: intern.email,
            phone_number: intern.phone_number,
            college: intern.college,
            course: intern.course,
            year_of_study: intern.year_of_study,
            skills: intern.skills,
            resume_url: intern.resume_url,
            linkedin_profile: intern.linkedin_profile,
            github_profile: intern.github_profile,
            created_at: intern.created_at,
        }
    }
}

/// Intern submission response
#[derive(Serialize)]
pub struct SubmitInternResponse {
    pub message: String,
    pub intern: InternRecord,
}
