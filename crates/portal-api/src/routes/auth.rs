//! Authentication extractors and admin signup/login routes

use axum::{
    extract::{FromRef, FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    routing::post,
    Json, Router,
};
use portal_auth::{
    authorize, extract_bearer_token, hash_password, verify_password, AuthError, AuthUser,
    INTERN_VIEWER_ROLES,
};
use portal_db::{AdminRole, NewAdmin};
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{AdminProfile, LoginRequest, LoginResponse, SignupRequest, SignupResponse};

// ==================== Auth Extractors ====================

/// Extractor for an authenticated admin (verifies the bearer token)
pub struct RequireAuth(pub AuthUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::MissingAuthHeader)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = app_state.jwt.validate_token(token)?;
        let user = AuthUser::from_claims(&claims)?;

        debug!("Authenticated admin: {} ({})", user.id, user.role.as_str());
        Ok(RequireAuth(user))
    }
}

/// Extractor for an admin allowed to view intern submissions
///
/// Layers the role check on top of `RequireAuth`; the two stages stay
/// independent so other endpoints can declare different allow-sets.
pub struct RequireInternViewer(pub AuthUser);

impl<S> FromRequestParts<S> for RequireInternViewer
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAuth(user) = RequireAuth::from_request_parts(parts, state).await?;
        authorize(user.role, INTERN_VIEWER_ROLES)?;
        Ok(RequireInternViewer(user))
    }
}

// ==================== Input Validation ====================

/// Maximum allowed password length (prevent DoS with very large passwords)
const MAX_PASSWORD_LENGTH: usize = 256;

/// Require a present, non-empty field
fn require_field<'a>(value: &'a Option<String>) -> Result<&'a str, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing_fields()),
    }
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("bad request : missing fields!".to_string())
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "Password exceeds maximum length of {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

// ==================== Auth Routes ====================

/// POST /admin/signup
async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    // Validation happens before any hashing or persistence
    let name = require_field(&request.name)?;
    let email = require_field(&request.email)?;
    let password = require_field(&request.password)?;
    let role_str = require_field(&request.role)?;
    validate_password(password)?;

    let role = AdminRole::from_str(role_str)
        .map_err(|_| ApiError::BadRequest(format!("Invalid role: {}", role_str)))?;

    debug!("Signup attempt for email: {}", email);

    let password_hash = hash_password(password)?;

    // The store's unique index on email decides duplicates, so concurrent
    // signups for the same address resolve to exactly one success
    let admin = state
        .db
        .insert_admin(NewAdmin {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role,
        })
        .await?;

    let token = state.jwt.generate_token(admin.id, admin.role.as_str())?;

    info!("Admin account created: {}", admin.email);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully!".to_string(),
            token,
            user: AdminProfile::from(&admin),
        }),
    ))
}

/// POST /admin/login
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = require_field(&request.email)?;
    let password = require_field(&request.password)?;
    validate_password(password)?;

    debug!("Login attempt for email: {}", email);

    let admin_result = state.db.get_admin_by_email(email).await?;

    // Always run a verification so a missing account costs the same as a
    // wrong password. The dummy value is a valid argon2 hash that matches
    // no plaintext we would ever receive.
    const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGltaW5nX2F0dGFja19wcmV2ZW50aW9u$K8rI5T7VdQ8xkO0GqK5K2w";

    let (hash_to_verify, admin) = match admin_result {
        Some(a) => (a.password_hash.clone(), Some(a)),
        None => (DUMMY_HASH.to_string(), None),
    };

    let password_valid = verify_password(password, &hash_to_verify)?;

    // One message for both failure modes; the response never says whether
    // the account exists
    let admin = match (admin, password_valid) {
        (Some(a), true) => a,
        _ => return Err(ApiError::Auth(AuthError::InvalidCredentials)),
    };

    let token = state.jwt.generate_token(admin.id, admin.role.as_str())?;

    info!("Admin {} logged in", admin.email);

    Ok(Json(LoginResponse {
        token,
        user: AdminProfile::from(&admin),
    }))
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/signup", post(signup))
        .route("/admin/login", post(login))
}
