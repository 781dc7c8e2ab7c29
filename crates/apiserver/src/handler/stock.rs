use crate::{
    abstract_trait::DynStockService,
    domain::requests::{pagination::ListQuery, stock::StockAdjustRequest},
    middleware::{jwt::auth_middleware, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::errors::HttpError;
use std::sync::Arc;

pub async fn get_stock_handler(
    Extension(service): Extension<DynStockService>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .list_stock(
            query.take_or_default(),
            query.skip_or_default(),
            query.order_or_default(),
        )
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn add_stock_handler(
    Extension(service): Extension<DynStockService>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockAdjustRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_stock(body.id, body.quantity).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub async fn remove_stock_handler(
    Extension(service): Extension<DynStockService>,
    SimpleValidatedJson(body): SimpleValidatedJson<StockAdjustRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_stock(body.id, body.quantity).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/stock", get(get_stock_handler))
        .route("/stock/add", put(add_stock_handler))
        .route("/stock/remove", put(remove_stock_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.stock_service.clone()))
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
