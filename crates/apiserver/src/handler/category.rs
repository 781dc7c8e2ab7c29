use crate::{
    abstract_trait::DynCategoryService,
    domain::{requests::category::CategoryNameRequest, response::api::MessageResponse},
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_categories_handler(
    Extension(service): Extension<DynCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.list_categories().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn create_category_handler(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryNameRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.create_category(&body.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Category created successfully")),
    ))
}

pub async fn update_category_handler(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryNameRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_category(id, &body.name).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Category updated successfully")),
    ))
}

pub async fn delete_category_handler(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_category(id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Category deleted successfully")),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/category", get(get_categories_handler))
        .route("/category/create", post(create_category_handler))
        .route("/category/update/{id}", put(update_category_handler))
        .route("/category/delete/{id}", delete(delete_category_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
