use axum::{extract::State, http::StatusCode, Json};
use haven::User;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{error::ApiResult, state::AppState};

/// Any credentials are accepted
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub signed_in: bool,
    pub user: Option<UserResponse>,
}

/// Sign in with any email and password
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = UserResponse)
    ),
    tag = "auth"
)]
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.companion.sign_in(&req.email, &req.password).await?;
    tracing::info!(user_id = %user.id, "User signed in");
    Ok(Json(user_to_response(user)))
}

/// Create an account; behaves like sign-in with an explicit display name
#[utoipa::path(
    post,
    path = "/auth/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created and signed in", body = UserResponse)
    ),
    tag = "auth"
)]
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .companion
        .sign_up(&req.email, &req.password, &req.name)
        .await?;
    tracing::info!(user_id = %user.id, "User signed up");
    Ok((StatusCode::CREATED, Json(user_to_response(user))))
}

/// Sign out and erase the user's chats
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 204, description = "Signed out")
    ),
    tag = "auth"
)]
pub async fn sign_out(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    if let Some(user) = state.companion.sign_out().await? {
        tracing::info!(user_id = %user.id, "User signed out");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Current session
#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "Session state", body = SessionResponse)
    ),
    tag = "auth"
)]
pub async fn session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let user = state.companion.current_user().await;
    Json(SessionResponse {
        signed_in: user.is_some(),
        user: user.map(user_to_response),
    })
}

pub(crate) fn user_to_response(user: User) -> UserResponse {
    UserResponse {
        user_id: user.id,
        email: user.email,
        name: user.name,
        avatar: user.avatar,
    }
}
