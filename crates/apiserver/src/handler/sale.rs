use crate::{
    abstract_trait::DynSaleService,
    domain::{
        requests::{pagination::ListQuery, sale::CreateSaleRequest},
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
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_sales_handler(
    Extension(service): Extension<DynSaleService>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .list_sales(
            query.take_or_default(),
            query.skip_or_default(),
            query.order_or_default(),
        )
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn register_sale_handler(
    Extension(service): Extension<DynSaleService>,
    Extension(auth_user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .register_sale(body.product_id, body.quantity, body.price, auth_user.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn delete_sale_handler(
    Extension(service): Extension<DynSaleService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_sale(id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Sale deleted successfully")),
    ))
}

pub fn sale_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/sale", get(get_sales_handler))
        .route("/sale/add", post(register_sale_handler))
        .route("/sale/{id}", delete(delete_sale_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.sale_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
