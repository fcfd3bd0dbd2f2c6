/*
 * Responsibility
 * - Path の String を公開 ID 型として受け、復号して内部 ID 型へ変換する
 * 主な責務
 *  - sqids codec を使った decode
 *  - Axum の FromRequestParts 実装
 *  - 復号できない ID は「そのリソースは存在しない」として 404 に変換
 * 置かないもの
 *  - Kitten といった具体リソース名 (types 側で PublicResource を実装する)
 */
use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;

/// 公開 ID で参照されるリソース
pub trait PublicResource {
    // 404 のメッセージに使う名前
    const NAME: &'static str;
}

#[derive(Clone, Copy)]
pub struct PublicId<T> {
    pub id: i64,
    _marker: PhantomData<T>,
}

impl<T> PublicId<T> {
    fn new(id: i64) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }
}

impl<T> FromRequestParts<AppState> for PublicId<T>
where
    T: PublicResource + Send + Sync, // Send: スレッド間で move して良い / Sync: 複数スレッドから参照して良い
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(public_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(T::NAME))?;

        let id = state.id_codec.decode(&public_id).map_err(|err| {
            tracing::debug!(error = %err, public_id = %public_id, "undecodable public id");
            AppError::not_found(T::NAME)
        })?;

        Ok(Self::new(id))
    }
}

impl<T> std::fmt::Debug for PublicId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicId").field("id", &self.id).finish()
    }
}
