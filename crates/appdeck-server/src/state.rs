use crate::checkout::CheckoutClient;
use crate::config::AppConfig;
use appdeck_core::Directory;
use std::sync::Arc;

/// Shared request state. The directory is loaded once at startup and
/// immutable for the process lifetime; edits go through the admin
/// workflow and a restart.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub config: Arc<AppConfig>,
    pub checkout: Option<Arc<CheckoutClient>>,
}

impl AppState {
    pub fn new(directory: Directory, config: AppConfig) -> Self {
        let checkout = config
            .stripe
            .secret_key
            .as_ref()
            .map(|key| Arc::new(CheckoutClient::new(config.stripe.api_base.clone(), key.clone())));
        Self {
            directory: Arc::new(directory),
            config: Arc::new(config),
            checkout,
        }
    }
}
