use crate::di::DependenciesInject;
use anyhow::Result;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub pool: ConnectionPool,
}

impl AppState {
    pub fn new(config: &Config, pool: ConnectionPool) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::new(pool.clone(), hashing, jwt_config.clone());

        Ok(Self {
            jwt_config,
            di_container,
            pool,
        })
    }
}
