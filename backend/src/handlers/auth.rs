use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{LoginRequest, LoginResponse, RegisterRequest, User, UserResponse, UserRole},
    state::AppState,
    utils::{
        jwt::create_access_token,
        password::{hash_password, verify_password},
    },
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let user = state
        .users
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::warn!(user_id = %user.id, "Rejected login with wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    Ok(Json(issue_session(&state, user)?))
}

/// Creates a member account and signs it in.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    payload.validate()?;

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(
        &payload.email,
        &payload.display_name,
        password_hash,
        UserRole::Member,
    );
    let user = state.users.create(&user).await?;
    tracing::info!(user_id = %user.id, "Registered new account");

    Ok((StatusCode::CREATED, Json(issue_session(&state, user)?)))
}

pub async fn me(Extension(user): Extension<User>) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

fn issue_session(state: &AppState, user: User) -> Result<LoginResponse, AppError> {
    let token = create_access_token(
        user.id.clone(),
        user.email.clone(),
        user.role.as_str().to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;
    Ok(LoginResponse {
        token,
        user: UserResponse::from(user),
    })
}
