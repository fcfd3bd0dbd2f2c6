/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - リクエストごとに作り直す (共有状態には置かない)
 */

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は token の `id` claim (kitten の ownerId と比較する値)
/// - `username` はログ相関用 (認可には使わない)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: i64,
    pub username: Option<String>,
}

impl AuthCtx {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            username: None,
        }
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }
}
