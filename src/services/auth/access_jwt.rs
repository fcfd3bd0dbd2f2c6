use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    EmptySecret,
    Jwt(jsonwebtoken::errors::Error),
    InvalidIdClaim,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "jwt secret must not be empty"),
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::InvalidIdClaim => write!(f, "invalid 'id' claim (expected integer)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims as issued for a user.
///
/// NOTE:
/// - `id` is kept as `Value` so both `1` and `"1"` are accepted; it is promoted to `i64` in
///   `verify_verified`.
/// - `exp` presence is enforced by `Validation::required_spec_claims`, not by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub exp: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
}

/// AuthService が返す「検証済み・アプリ側で使う型」
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub user_id: i64,
    pub username: Option<String>,
}

fn parse_id_claim(id: &serde_json::Value) -> Option<i64> {
    match id {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        // Missing claim ends up as Null due to #[serde(default)]
        _ => None,
    }
}

/// HS256 access-token verifier.
///
/// - The shared secret is injected at construction and never printed via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str, leeway_seconds: u64, require_exp: bool) -> Result<Self, AccessJwtError> {
        if secret.is_empty() {
            return Err(AccessJwtError::EmptySecret);
        }

        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // audience は発行側の関心事。署名と期限だけで判定する
        validation.validate_aud = false;
        if require_exp {
            validation.set_required_spec_claims(&["exp"]);
        } else {
            // exp が付いていれば検証する、無ければ通す
            validation.required_spec_claims.clear();
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    // Verify and decode a JWT access token.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify, then convert claims into an application-friendly type.
    ///
    /// This is the recommended entry-point for middleware/handlers.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.verify(token)?;

        let user_id = parse_id_claim(&claims.id).ok_or(AccessJwtError::InvalidIdClaim)?;

        Ok(VerifiedAccessToken {
            user_id,
            username: claims.username,
        })
    }
}
