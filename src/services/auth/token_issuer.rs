use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct AccessTokenClaims<'a> {
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    iat: i64,
    exp: i64,
}

/// HS256 token issuer sharing the verifier's secret.
///
/// Used by `token-gen` and by tests; the service itself only verifies.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_seconds: u64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue an access token for `user_id`, valid for `ttl_seconds` from now.
    pub fn issue(
        &self,
        user_id: i64,
        username: Option<&str>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessTokenClaims {
            id: user_id,
            username,
            iat: now,
            exp: now + self.ttl_seconds as i64,
        };

        self.sign(&claims)
    }

    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, jsonwebtoken::errors::Error> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key)
    }
}
