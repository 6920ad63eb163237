use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;

use crate::api::rest::{dto, handlers};
use crate::domain::service::Service;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::sign_up,
        handlers::sign_up_owner,
        handlers::sign_in,
        handlers::sign_out,
        handlers::account_resolution,
    ),
    components(schemas(
        dto::SignupReq,
        dto::OwnerSignupReq,
        dto::LoginReq,
        dto::SignupReceiptDto,
        dto::SessionDto,
        dto::AccountResolutionDto,
        crate::api::problem::Problem,
    )),
    tags((name = "accounts", description = "Account provisioning"))
)]
struct ApiDoc;

/// Build the accounts router. `timeout` of zero disables the timeout layer.
pub fn router(service: Arc<Service>, timeout: Duration) -> Router {
    let mut router = Router::new()
        .route("/signup", post(handlers::sign_up))
        .route("/signup/owner", post(handlers::sign_up_owner))
        .route("/login", post(handlers::sign_in))
        .route("/logout", post(handlers::sign_out))
        .route(
            "/accounts/{user_id}/resolution",
            get(handlers::account_resolution),
        )
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    if !timeout.is_zero() {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    router.layer(Extension(service))
}
