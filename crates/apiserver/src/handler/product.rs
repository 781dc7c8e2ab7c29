use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::product::{
            CreateProductRequest, ProductDetailsQuery, ProductIdRequest, UpdateProductRequest,
        },
        response::api::MessageResponse,
    },
    middleware::{
        jwt::{AuthUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_product_handler(
    Extension(service): Extension<DynProductService>,
    Query(query): Query<ProductDetailsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.product_details(query.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn register_product_handler(
    Extension(service): Extension<DynProductService>,
    Extension(auth_user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service
        .register_product(&body.name, body.price, body.category_id, auth_user.user_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Product registered successfully")),
    ))
}

pub async fn update_product_handler(
    Extension(service): Extension<DynProductService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_product(&body).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product updated successfully")),
    ))
}

pub async fn delete_product_handler(
    Extension(service): Extension<DynProductService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductIdRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(body.id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product deleted successfully")),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/product", get(get_product_handler))
        .route("/product/register", post(register_product_handler))
        .route("/product/update", put(update_product_handler))
        .route("/product/delete", delete(delete_product_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
