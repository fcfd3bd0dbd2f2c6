/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>, ConfigError> {
    let auth = AuthService::new(
        &config.jwt_secret,
        config.jwt_leeway_seconds,
        config.jwt_require_exp,
    )
    .map_err(|err| {
        tracing::error!(error = %err, "failed to build auth service");
        ConfigError::Invalid("JWT_SECRET")
    })?;

    Ok(Arc::new(auth))
}
