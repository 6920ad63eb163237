use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::problem::{Problem, ProblemResponse};
use crate::api::rest::dto::{
    AccountResolutionDto, LoginReq, OwnerSignupReq, SessionDto, SignupReceiptDto, SignupReq,
};
use crate::api::rest::error::{from_parts, map_domain_error};
use crate::domain::service::Service;

/// Provision a consumer account
#[utoipa::path(
    post,
    path = "/signup",
    tag = "accounts",
    request_body = SignupReq,
    responses(
        (status = 201, description = "Account provisioned", body = SignupReceiptDto),
        (status = 400, description = "Missing fields", body = Problem),
        (status = 409, description = "Duplicate email or signup in flight", body = Problem),
        (status = 422, description = "Rejected by the identity provider", body = Problem),
        (status = 502, description = "Identity provider unavailable", body = Problem),
    )
)]
pub async fn sign_up(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<SignupReq>,
) -> Result<(StatusCode, Json<SignupReceiptDto>), ProblemResponse> {
    info!(email = %req_body.email, "Consumer signup requested");

    match svc.sign_up(req_body.into()).await {
        Ok(receipt) => Ok((StatusCode::CREATED, Json(SignupReceiptDto::from(receipt)))),
        Err(e) => {
            error!("Signup failed: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Provision a store-owner account
#[utoipa::path(
    post,
    path = "/signup/owner",
    tag = "accounts",
    request_body = OwnerSignupReq,
    responses(
        (status = 201, description = "Account provisioned", body = SignupReceiptDto),
        (status = 400, description = "Missing fields", body = Problem),
        (status = 409, description = "Duplicate email or signup in flight", body = Problem),
        (status = 422, description = "Rejected by the identity provider", body = Problem),
        (status = 502, description = "Identity provider unavailable", body = Problem),
    )
)]
pub async fn sign_up_owner(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<OwnerSignupReq>,
) -> Result<(StatusCode, Json<SignupReceiptDto>), ProblemResponse> {
    info!(email = %req_body.email, "Store-owner signup requested");

    match svc.sign_up_owner(req_body.into()).await {
        Ok(receipt) => Ok((StatusCode::CREATED, Json(SignupReceiptDto::from(receipt)))),
        Err(e) => {
            error!("Owner signup failed: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "accounts",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Session created", body = SessionDto),
        (status = 400, description = "Missing fields", body = Problem),
        (status = 401, description = "Invalid credentials", body = Problem),
        (status = 502, description = "Identity provider unavailable", body = Problem),
    )
)]
pub async fn sign_in(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<LoginReq>,
) -> Result<Json<SessionDto>, ProblemResponse> {
    info!(email = %req_body.email, "Login requested");

    match svc.sign_in(&req_body.email, &req_body.password).await {
        Ok(session) => Ok(Json(SessionDto::from(session))),
        Err(e) => {
            error!("Login failed: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Revoke the bearer session token
#[utoipa::path(
    post,
    path = "/logout",
    tag = "accounts",
    responses(
        (status = 204, description = "Session revoked (best effort)"),
        (status = 400, description = "Missing bearer token", body = Problem),
    )
)]
pub async fn sign_out(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    headers: HeaderMap,
) -> Result<StatusCode, ProblemResponse> {
    let token = bearer_token(&headers).ok_or_else(|| {
        from_parts(
            StatusCode::BAD_REQUEST,
            "ACCOUNTS_MISSING_TOKEN",
            "Missing bearer token",
            "An Authorization: Bearer header is required",
            uri.path(),
        )
    })?;

    match svc.sign_out(token).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Logout failed: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Resolve the profile kind attached to an identity
#[utoipa::path(
    get,
    path = "/accounts/{user_id}/resolution",
    tag = "accounts",
    params(("user_id" = Uuid, Path, description = "Identity id")),
    responses(
        (status = 200, description = "Resolution", body = AccountResolutionDto),
        (status = 500, description = "Internal error", body = Problem),
    )
)]
pub async fn account_resolution(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<AccountResolutionDto>, ProblemResponse> {
    match svc.resolve_account(user_id).await {
        Ok(resolution) => Ok(Json(AccountResolutionDto::from(resolution))),
        Err(e) => {
            error!("Account resolution failed for {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
