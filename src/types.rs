use std::sync::Arc;

use crate::config::Config;
use crate::modules::auth::credentials::{CredentialStore, StaticCredentialStore};
use crate::modules::auth::token::TokenCodec;

#[derive(Clone)]
pub struct AppState {
    pub codec: TokenCodec,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(codec: TokenCodec, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { codec, credentials }
    }

    pub fn from_config(config: &Config) -> Self {
        let codec = TokenCodec::new(config.jwt_secret.clone(), config.token_ttl);
        let credentials =
            StaticCredentialStore::new(config.username.clone(), config.password.clone());
        Self::new(codec, Arc::new(credentials))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
