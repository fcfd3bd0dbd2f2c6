/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / text or JSON error body)
 * - RepoError / IdCodecError / JsonRejection / FormRejection を統一的に変換
 * - ログは IntoResponse (route の境界) でだけ出す
 * - 終端のエラーは status >= 400 を保証する (2xx/3xx で返さない)
 */
use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::id_codec::IdCodecError;

/// 500 系 / validation エラーのレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub name: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    // Authorization ヘッダなし
    #[error("unauthenticated")]
    Unauthenticated,
    // `Bearer <token>` の形になっていない
    #[error("malformed credential")]
    MalformedCredential,
    // 署名/期限/claim の検証失敗
    #[error("invalid credential")]
    InvalidCredential,
    // 認証済みだが所有者ではない
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("{name}: {message}")]
    BadRequest { name: &'static str, message: String },
    #[error("{name}: {message}")]
    Rejected {
        status: StatusCode,
        name: &'static str,
        message: String,
    },
    #[error("{name}: {message}")]
    Internal { name: &'static str, message: String },
}

impl AppError {
    pub fn bad_request(name: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            name,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn internal(name: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            name,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated
            | AppError::MalformedCredential
            | AppError::InvalidCredential
            | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => terminal_status(*status),
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 終端ハンドラは 400 未満のステータスを 500 に引き上げる
fn terminal_status(status: StatusCode) -> StatusCode {
    if status.as_u16() < 400 {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        status
    }
}

fn bearer_challenge(status: StatusCode, body: &'static str) -> Response {
    let mut res = (status, body).into_response();
    res.headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    res
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Unauthenticated => bearer_challenge(status, "Unauthorized"),
            AppError::MalformedCredential | AppError::InvalidCredential => {
                bearer_challenge(status, "Invalid token")
            }
            AppError::Unauthorized => (status, "Unauthorized").into_response(),
            AppError::NotFound { resource } => {
                (status, format!("{resource} not found")).into_response()
            }
            AppError::BadRequest { name, message } => {
                let body = ErrorResponse {
                    error: message.clone(),
                    name,
                    message,
                };
                (status, Json(body)).into_response()
            }
            AppError::Rejected { name, message, .. } | AppError::Internal { name, message } => {
                tracing::error!(status = %status, error_name = name, message = %message, "request failed");
                let body = ErrorResponse {
                    error: message.clone(),
                    name,
                    message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Db(_) => AppError::internal("DatabaseError", "database error"),
        }
    }
}

impl From<IdCodecError> for AppError {
    fn from(e: IdCodecError) -> Self {
        match e {
            // 復号できない公開 ID はどのリソースも指さない
            IdCodecError::DecodeInvalidFormat | IdCodecError::DecodeOutOfRange => {
                AppError::not_found("Kitten")
            }
            // server 側の設定ミス / プログラミングエラー
            other => AppError::internal("IdCodecError", other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::bad_request("ValidationError", rejection.body_text())
            }
            _ => AppError::Rejected {
                status: rejection.status(),
                name: "RequestRejected",
                message: rejection.body_text(),
            },
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        match &rejection {
            FormRejection::FailedToDeserializeForm(_)
            | FormRejection::FailedToDeserializeFormBody(_) => {
                AppError::bad_request("ValidationError", rejection.body_text())
            }
            _ => AppError::Rejected {
                status: rejection.status(),
                name: "RequestRejected",
                message: rejection.body_text(),
            },
        }
    }
}
