use std::sync::Arc;

use crate::infrastructure::{
    auth::JwtKeys,
    config::Config,
    db::PgPool,
    store::{FollowStore, PgFollowStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: PgPool,
    pub follows: Arc<dyn FollowStore>,
    pub jwt_keys: JwtKeys,
}

impl AppState {
    pub fn new(config: Arc<Config>, pool: PgPool) -> Self {
        let jwt_keys = JwtKeys::new(&config.auth.jwt_secret);
        let follows = Arc::new(PgFollowStore::new(pool.clone()));
        Self {
            config,
            pool,
            follows,
            jwt_keys,
        }
    }
}
