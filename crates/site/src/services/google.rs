//! Google sign-in via the OAuth 2.0 authorization-code flow.
//!
//! The site only needs a stable subject id, a display name, and an email
//! (for the admin allow-list), so the plain `openid email profile` scopes
//! against the OpenID Connect userinfo endpoint are enough.

use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use everafter_core::{Email, GuestId};

use crate::config::GoogleOAuthConfig;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const SCOPES: &str = "openid email profile";

/// Errors from the identity-provider handshake.
#[derive(Debug, Error)]
pub enum GoogleAuthError {
    /// HTTP transport failure talking to Google.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error or an unusable payload.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Callback state did not match the value stored in the session.
    #[error("State mismatch")]
    StateMismatch,

    /// Failed to build a provider URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// The identity facts the site keeps from a sign-in.
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    /// Stable provider subject, used as the guest id.
    pub subject: GuestId,
    /// Display name, if the profile carries one.
    pub name: Option<String>,
    /// Verified email, used for the admin allow-list.
    pub email: Email,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
    name: Option<String>,
    email: Option<String>,
}

/// Client for the Google authorization-code flow.
pub struct GoogleAuthService {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GoogleAuthService {
    /// Build a client from the OAuth config and the site's public base URL.
    #[must_use]
    pub fn new(config: &GoogleOAuthConfig, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.expose_secret().to_string(),
            redirect_uri: format!("{}/auth/google/callback", base_url.trim_end_matches('/')),
        }
    }

    /// The URL to send the guest to, carrying the anti-forgery `state`.
    ///
    /// # Errors
    ///
    /// Returns `GoogleAuthError::Url` if the endpoint fails to parse.
    pub fn authorization_url(&self, state: &str) -> Result<Url, GoogleAuthError> {
        let mut url = Url::parse(AUTH_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPES)
            .append_pair("state", state);
        Ok(url)
    }

    /// Exchange the callback code and fetch the signed-in identity.
    ///
    /// # Errors
    ///
    /// Returns `GoogleAuthError` if the exchange fails or the profile lacks
    /// a usable email.
    pub async fn fetch_identity(&self, code: &str) -> Result<GoogleIdentity, GoogleAuthError> {
        let token: TokenResponse = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| GoogleAuthError::Provider(format!("token exchange failed: {e}")))?
            .json()
            .await?;

        let info: UserInfoResponse = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| GoogleAuthError::Provider(format!("userinfo fetch failed: {e}")))?
            .json()
            .await?;

        let email = info
            .email
            .as_deref()
            .and_then(|e| Email::parse(e).ok())
            .ok_or_else(|| GoogleAuthError::Provider("profile has no usable email".to_string()))?;

        Ok(GoogleIdentity {
            subject: GuestId::new(info.sub),
            name: info.name,
            email,
        })
    }
}

/// Random URL-safe state for the anti-forgery check.
#[must_use]
pub fn generate_state() -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    (0..32)
        .map(|_| {
            const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn service() -> GoogleAuthService {
        GoogleAuthService::new(
            &GoogleOAuthConfig {
                client_id: "client-id".to_string(),
                client_secret: SecretString::from("client-secret"),
            },
            "https://example.com/",
        )
    }

    #[test]
    fn test_authorization_url_carries_state_and_redirect() {
        let url = service().authorization_url("abc123").unwrap();
        assert_eq!(url.domain(), Some("accounts.google.com"));
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("state".to_string(), "abc123".to_string())));
        assert!(query.contains(&(
            "redirect_uri".to_string(),
            "https://example.com/auth/google/callback".to_string()
        )));
    }

    #[test]
    fn test_generate_state_is_random_and_urlsafe() {
        let a = generate_state();
        let b = generate_state();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
