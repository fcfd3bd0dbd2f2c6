/*
 * Responsibility
 * - 作成系 body の受け取り (application/json と application/x-www-form-urlencoded)
 * - Content-Type で Json / Form を振り分け、rejection は AppError に変換する
 * - それ以外の Content-Type は Json 側の rejection (415) になる
 */
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

pub struct JsonOrForm<T>(pub T);

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

impl<T> FromRequest<AppState> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}
