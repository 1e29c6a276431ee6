use std::sync::Arc;

use config::Config;

use crate::data::UserStore;

/// State type for route handlers.
pub type S = AppState;

#[derive(Clone)]
pub struct AppState {
    store: Arc<UserStore>,
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            store: UserStore::new().into(),
            config,
        }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
