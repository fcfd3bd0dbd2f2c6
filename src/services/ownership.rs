/*
 * Responsibility
 * - kitten の所有者チェック (read/delete は owner のみ)
 * - 作成時に owner を呼び出し元で確定させる (body からは受け取らない)
 *
 * Notes
 * - not found の判定は呼び出し側が先に行う (存在確認 → 所有者確認の順)
 */
use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::repos::kitten_repo::{KittenRow, NewKitten};

/// Owner を持たない作成リクエストの中身
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KittenDraft {
    pub name: String,
    pub age: i32,
    pub color: String,
}

pub fn ensure_owner(auth: &AuthCtx, kitten: &KittenRow) -> Result<(), AppError> {
    if kitten.owner_id == auth.user_id {
        Ok(())
    } else {
        tracing::info!(
            kitten_id = kitten.kitten_id,
            user_id = auth.user_id,
            "kitten access denied: caller is not the owner"
        );
        Err(AppError::Unauthorized)
    }
}

pub fn stamp_owner(auth: &AuthCtx, draft: KittenDraft) -> NewKitten {
    NewKitten {
        owner_id: auth.user_id,
        name: draft.name,
        age: draft.age,
        color: draft.color,
    }
}
