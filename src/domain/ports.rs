use crate::domain::model::Destination;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage key for the session token. Fixed; both the app and its tests rely
/// on it staying stable across releases.
pub const TOKEN_KEY: &str = "user_token";

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn save_token(&self, token: &str) -> Result<()>;
    async fn load_token(&self) -> Result<Option<String>>;
    async fn clear_token(&self) -> Result<()>;
}

/// Outbound navigation port. The host UI decides how a `Destination` is
/// realized; the flows only ever emit one on success paths.
pub trait NavigationEffect: Send + Sync {
    fn navigate(&self, destination: Destination);
}

pub trait ClientConfig: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn token_path(&self) -> &str;
}
