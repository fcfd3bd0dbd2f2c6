/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - kittens: KittenRepo, id_codec: IdCodec, auth: AuthService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::{fmt, sync::Arc};

use crate::repos::KittenRepo;
use crate::services::{auth::AuthService, id_codec::IdCodec};

#[derive(Clone)]
pub struct AppState {
    pub kittens: Arc<dyn KittenRepo>,
    pub id_codec: IdCodec,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(kittens: Arc<dyn KittenRepo>, id_codec: IdCodec, auth: Arc<AuthService>) -> Self {
        Self {
            kittens,
            id_codec,
            auth,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("kittens", &self.kittens.backend_name())
            .field("id_codec", &self.id_codec)
            .field("auth", &self.auth)
            .finish()
    }
}
