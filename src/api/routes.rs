/*
 * Responsibility
 * - URL 構造を定義
 * - / と /health は認証なし、/kittens 系は Bearer 必須
 * - Bearer は route_layer で protected 側にだけ掛ける (未定義パスは 404 のまま)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::{middleware, state::AppState};

use crate::api::handlers::{
    health::health,
    home::home,
    kittens::{create_kitten, delete_kitten, get_kitten},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/kittens", post(create_kitten))
        .route("/kittens/{kitten_id}", get(get_kitten).delete(delete_kitten));
    let protected = middleware::auth::access::apply(protected, state);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(protected)
}
