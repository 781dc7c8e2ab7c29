use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        response::api::MessageResponse,
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{config::SESSION_TTL_DAYS, errors::HttpError};
use std::sync::Arc;
use time::Duration;

pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login_user_handler(
    jar: CookieJar,
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;

    let cookie = Cookie::build(("token", response.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::days(SESSION_TTL_DAYS));

    Ok((jar.add(cookie), (StatusCode::OK, Json(response))))
}

pub async fn logout_user_handler(jar: CookieJar) -> Result<impl IntoResponse, HttpError> {
    let cookie = Cookie::build(("token", ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO);

    Ok((
        jar.add(cookie),
        (
            StatusCode::OK,
            Json(MessageResponse::new("Logged out successfully")),
        ),
    ))
}

pub fn auth_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/auth/register", post(register_user_handler))
        .route("/auth/login", post(login_user_handler))
        .route("/auth/logout", get(logout_user_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
