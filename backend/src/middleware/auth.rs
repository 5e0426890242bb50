use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::User,
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

/// Requires a valid bearer token and inserts `Claims` and `User` extensions.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, user) = authenticate_request(bearer_header(&request), &state).await?;
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Same as [`auth`], then rejects users without the admin role.
pub async fn auth_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (claims, user) = authenticate_request(bearer_header(&request), &state).await?;
    if !user.is_admin() {
        tracing::warn!(user_id = %user.id, "Non-admin user rejected from admin route");
        return Err(AppError::Forbidden("Admin access required".into()));
    }
    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn bearer_header(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned())
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

async fn authenticate_request(
    auth_header: Option<String>,
    state: &AppState,
) -> Result<(Claims, User), AppError> {
    let rejected = || AppError::Unauthorized("Authentication required".into());
    let token = auth_header
        .as_deref()
        .and_then(parse_bearer_token)
        .ok_or_else(rejected)?;

    let claims =
        verify_access_token(token, &state.config.jwt_secret).map_err(|_| rejected())?;

    let user = state.users.find_by_id(&claims.sub).await?.ok_or_else(rejected)?;

    Ok((claims, user))
}
