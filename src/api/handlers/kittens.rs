/*
 * Responsibility
 * - /kittens 系 handler (create / get / delete)
 * - 認証は middleware 済み。handler は AuthCtx を受け取り、所有者チェックを行う
 * - Path の :kitten_id は公開 ID → extractor で内部 ID に変換して受け取る
 * - 存在確認 (404) → 所有者確認 (401) の順
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
};

use crate::{
    api::{
        dto::kittens::{CreateKittenRequest, KittenResponse},
        extractors::{AuthCtxExtractor, JsonOrForm, PublicKittenId},
    },
    error::AppError,
    services::ownership,
    state::AppState,
};

pub async fn create_kitten(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    JsonOrForm(req): JsonOrForm<CreateKittenRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<KittenResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("ValidationError", msg))?;

    let new_kitten = ownership::stamp_owner(&auth, req.into());
    let row = state.kittens.create(new_kitten).await?;

    let public_id = state.id_codec.encode(row.kitten_id)?;
    tracing::info!(
        kitten_id = row.kitten_id,
        owner_id = row.owner_id,
        "kitten created"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/kittens/{public_id}"))],
        Json(KittenResponse::from(row)),
    ))
}

pub async fn get_kitten(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    kitten_id: PublicKittenId,
) -> Result<Json<KittenResponse>, AppError> {
    let row = state
        .kittens
        .get(kitten_id.id)
        .await?
        .ok_or(AppError::not_found("Kitten"))?;

    ownership::ensure_owner(&auth, &row)?;

    Ok(Json(KittenResponse::from(row)))
}

pub async fn delete_kitten(
    State(state): State<AppState>,
    AuthCtxExtractor(auth): AuthCtxExtractor,
    kitten_id: PublicKittenId,
) -> Result<StatusCode, AppError> {
    let row = state
        .kittens
        .get(kitten_id.id)
        .await?
        .ok_or(AppError::not_found("Kitten"))?;

    ownership::ensure_owner(&auth, &row)?;

    // 確認後に別リクエストが消していた場合も 404 (二回目の 204 は返さない)
    let deleted = state
        .kittens
        .delete_owned(row.kitten_id, auth.user_id)
        .await?;

    if deleted {
        tracing::info!(kitten_id = row.kitten_id, "kitten deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Kitten"))
    }
}
