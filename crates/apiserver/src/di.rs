use crate::{
    abstract_trait::{
        DynAuthService, DynCategoryCommandRepository, DynCategoryQueryRepository,
        DynCategoryService, DynProductCommandRepository, DynProductQueryRepository,
        DynProductService, DynSaleCommandRepository, DynSaleQueryRepository, DynSaleService,
        DynStockService, DynUserCommandRepository, DynUserQueryRepository, DynUserService,
    },
    repository::{
        category::{CategoryCommandRepository, CategoryQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
        sale::{SaleCommandRepository, SaleQueryRepository},
        user::{UserCommandRepository, UserQueryRepository},
    },
    service::{
        AuthService, AuthServiceDeps, CategoryService, ProductService, SaleService, StockService,
        UserService, UserServiceDeps,
    },
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub stock_service: DynStockService,
    pub sale_service: DynSaleService,
    // Exposed separately for the auth middleware's per-request
    // active-account re-check.
    pub user_query: DynUserQueryRepository,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("category_service", &"DynCategoryService")
            .field("product_service", &"DynProductService")
            .field("stock_service", &"DynStockService")
            .field("sale_service", &"DynSaleService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let user_query: DynUserQueryRepository =
            Arc::new(UserQueryRepository::new(pool.clone()));
        let user_command: DynUserCommandRepository =
            Arc::new(UserCommandRepository::new(pool.clone()));
        let category_query: DynCategoryQueryRepository =
            Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command: DynCategoryCommandRepository =
            Arc::new(CategoryCommandRepository::new(pool.clone()));
        let product_query: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let sale_query: DynSaleQueryRepository = Arc::new(SaleQueryRepository::new(pool.clone()));
        let sale_command: DynSaleCommandRepository = Arc::new(SaleCommandRepository::new(pool));

        let auth_service: DynAuthService = Arc::new(AuthService::new(AuthServiceDeps {
            query: user_query.clone(),
            command: user_command.clone(),
            hashing: hashing.clone(),
            jwt,
        }));

        let user_service: DynUserService = Arc::new(UserService::new(UserServiceDeps {
            query: user_query.clone(),
            command: user_command,
            hashing,
        }));

        let category_service: DynCategoryService = Arc::new(CategoryService::new(
            category_query.clone(),
            category_command,
            product_query.clone(),
        ));

        let product_service: DynProductService = Arc::new(ProductService::new(
            product_query.clone(),
            product_command.clone(),
            category_query,
        ));

        let stock_service: DynStockService =
            Arc::new(StockService::new(product_query, product_command));

        let sale_service: DynSaleService = Arc::new(SaleService::new(sale_query, sale_command));

        Self {
            auth_service,
            user_service,
            category_service,
            product_service,
            stock_service,
            sale_service,
            user_query,
        }
    }
}
