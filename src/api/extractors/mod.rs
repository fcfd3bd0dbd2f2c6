/*
 * Responsibility
 * - handler が受け取る extractor 群 (認証コンテキスト、公開 ID、body)
 */
pub mod auth_ctx;
pub mod body;
pub mod public_id;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use body::JsonOrForm;
pub use public_id::{PublicId, PublicKittenId};
