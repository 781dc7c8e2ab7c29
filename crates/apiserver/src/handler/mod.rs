mod auth;
mod category;
mod product;
mod sale;
mod stock;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub use self::auth::auth_routes;
pub use self::category::category_routes;
pub use self::product::product_routes;
pub use self::sale::sale_routes;
pub use self::stock::stock_routes;
pub use self::user::user_routes;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let app = Router::new()
            .merge(auth_routes(shared_state.clone()))
            .merge(user_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(stock_routes(shared_state.clone()))
            .merge(sale_routes(shared_state.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
