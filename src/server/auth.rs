//! API key authorization middleware.
//!
//! When `server.auth.enabled` is set, streaming and catalog routes require
//! `Authorization: Bearer <api_key>`. Denied requests are answered before
//! the streaming engine is invoked.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeader,
};

use crate::config::AuthConfig;
use crate::error::Error;
use crate::server::AppContext;

/// Check the presented bearer token against the configured API key.
fn check_auth(auth_config: &AuthConfig, bearer_token: Option<&str>) -> Result<(), Error> {
    if !auth_config.enabled {
        return Ok(());
    }

    match (bearer_token, &auth_config.api_key) {
        (Some(token), Some(api_key)) if token == api_key => Ok(()),
        _ => Err(Error::Unauthorized("API key required".into())),
    }
}

/// Middleware enforcing the API key on protected routes.
pub async fn require_api_key(
    State(ctx): State<AppContext>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    let bearer_token = bearer.map(|b| b.token().to_string());

    check_auth(&ctx.config.server.auth, bearer_token.as_deref())?;

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool, api_key: Option<&str>) -> AuthConfig {
        AuthConfig {
            enabled,
            api_key: api_key.map(String::from),
        }
    }

    #[test]
    fn disabled_auth_allows_all() {
        assert!(check_auth(&config(false, None), None).is_ok());
        assert!(check_auth(&config(false, Some("key")), Some("wrong")).is_ok());
    }

    #[test]
    fn matching_key_allowed() {
        assert!(check_auth(&config(true, Some("secret")), Some("secret")).is_ok());
    }

    #[test]
    fn missing_or_wrong_key_denied() {
        assert!(check_auth(&config(true, Some("secret")), None).is_err());
        assert!(check_auth(&config(true, Some("secret")), Some("nope")).is_err());
    }

    #[test]
    fn enabled_without_configured_key_denies() {
        assert!(check_auth(&config(true, None), Some("anything")).is_err());
    }
}
