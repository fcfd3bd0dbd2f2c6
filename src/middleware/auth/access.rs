//! access token (JWT) 検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization` ヘッダなし → 401 `Unauthorized`
//! - `Bearer <token>` の形でない → 401 `Invalid token`
//! - 署名/期限/claim の検証失敗 → 401 `Invalid token`
//!
//! handler は middleware を通過した後にしか呼ばれないので、
//! kitten の lookup より前に必ず認証が終わっている。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// protected な Router に認証を掛ける。
///
/// `route_layer` なので、マッチしたルートにだけ適用される。
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

/// `Authorization: Bearer <token>` から token 部分を取り出す。
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthenticated)?;

    let value = raw.to_str().map_err(|_| AppError::MalformedCredential)?;

    let mut parts = value.split_whitespace();
    match parts.next() {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {}
        _ => return Err(AppError::MalformedCredential),
    }

    let token = parts.next().ok_or(AppError::MalformedCredential)?;
    if parts.next().is_some() {
        return Err(AppError::MalformedCredential);
    }

    Ok(token)
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(error = %err, "rejected request credential");
            return Err(err);
        }
    };

    let verified = match state.auth.verify_verified(token) {
        Ok(verified) => verified,
        Err(err) => {
            tracing::warn!(
                error = %err,
                "access token verification failed"
            );
            return Err(AppError::InvalidCredential);
        }
    };

    let auth_ctx = AuthCtx::new(verified.user_id).with_username(verified.username);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_unauthenticated() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn extracts_token_after_bearer_scheme() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token(&headers_with("bearer  abc")).unwrap(), "abc");
    }

    #[test]
    fn malformed_headers_are_rejected() {
        for value in ["Bearer", "Bearer ", "", "Basic dXNlcjpwYXNz", "abc.def.ghi", "Bearer a b"] {
            assert!(
                matches!(
                    bearer_token(&headers_with(value)),
                    Err(AppError::MalformedCredential)
                ),
                "expected malformed for {value:?}"
            );
        }
    }

    #[test]
    fn non_ascii_header_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::MalformedCredential)
        ));
    }
}
