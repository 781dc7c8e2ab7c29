use crate::{
    abstract_trait::DynUserService,
    domain::requests::user::{UpdateUserRequest, UserIdRequest},
    middleware::{
        jwt::{AuthUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json, middleware,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_user_handler(
    Extension(service): Extension<DynUserService>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_user(auth_user.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn update_user_handler(
    Extension(service): Extension<DynUserService>,
    Extension(auth_user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_user(auth_user.user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn deactivate_self_handler(
    Extension(service): Extension<DynUserService>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .deactivate(auth_user.user_id, auth_user.user_id)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn approve_user_handler(
    Extension(service): Extension<DynUserService>,
    Extension(auth_user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.approve(body.id, auth_user.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn disapprove_user_handler(
    Extension(service): Extension<DynUserService>,
    Extension(auth_user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.deactivate(body.id, auth_user.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/user", get(get_user_handler))
        .route("/user/update", put(update_user_handler))
        .route("/user/deactive", delete(deactivate_self_handler))
        .route("/user/approved", post(approve_user_handler))
        .route("/user/disapproved", post(disapprove_user_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
