//! Intern submission and listing routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use portal_db::NewIntern;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::RequireInternViewer;
use super::types::{InternRecord, SubmitInternRequest, SubmitInternResponse};

fn missing_fields() -> ApiError {
    ApiError::BadRequest("bad request : missing fields!".to_string())
}

fn require_field<'a>(value: &'a Option<String>) -> Result<&'a str, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing_fields()),
    }
}

/// POST /getIntern — public intern application submission
async fn submit_intern(
    State(state): State<AppState>,
    Json(request): Json<SubmitInternRequest>,
) -> Result<(StatusCode, Json<SubmitInternResponse>), ApiError> {
    let name = require_field(&request.name)?;
    let email = require_field(&request.email)?;
    let phone_number = require_field(&request.phone_number)?;
    let college = require_field(&request.college)?;
    let course = require_field(&request.course)?;
    let resume_url = require_field(&request.resume_url)?;
    let year_of_study = request.year_of_study.ok_or_else(missing_fields)?;
    let skills = request.skills.ok_or_else(missing_fields)?;

    if year_of_study <= 0 {
        return Err(ApiError::BadRequest("Invalid year of study".to_string()));
    }

    debug!("Intern submission for email: {}", email);

    let intern = state
        .db
        .insert_intern(NewIntern {
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            college: college.to_string(),
            course: course.to_string(),
            year_of_study,
            skills,
            resume_url: resume_url.to_string(),
            linkedin_profile: request.linkedin_profile.unwrap_or_default(),
            github_profile: request.github_profile.unwrap_or_default(),
        })
        .await?;

    info!("Intern response recorded: {}", intern.email);

    Ok((
        StatusCode::CREATED,
        Json(SubmitInternResponse {
            message: "Intern response submitted successfully!".to_string(),
            intern: InternRecord::from(intern),
        }),
    ))
}

/// GET /admin/getInterns — gated by token verification and the role allow-set
async fn list_interns(
    RequireInternViewer(user): RequireInternViewer,
    State(state): State<AppState>,
) -> Result<Json<Vec<InternRecord>>, ApiError> {
    debug!("Admin {} listing intern submissions", user.id);

    let interns = state.db.list_interns().await?;

    Ok(Json(interns.into_iter().map(InternRecord::from).collect()))
}

/// Create intern routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/getIntern", post(submit_intern))
        .route("/admin/getInterns", get(list_interns))
}
