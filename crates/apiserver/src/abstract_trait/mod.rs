mod auth;
mod category;
mod product;
mod sale;
mod stock;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait, CategoryServiceTrait,
    DynCategoryCommandRepository, DynCategoryQueryRepository, DynCategoryService,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::sale::{
    DynSaleCommandRepository, DynSaleQueryRepository, DynSaleService, SaleCommandRepositoryTrait,
    SaleQueryRepositoryTrait, SaleServiceTrait,
};
pub use self::stock::{DynStockService, StockServiceTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserService, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait, UserServiceTrait,
};
