/*
 * Responsibility
 * - GET / (案内用 HTML、認証なし)
 */
use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(
        r#"
      <h1>Welcome to Cyber Kittens!</h1>
      <p>Cats are available at <code>GET /kittens/:id</code></p>
      <p>Create a new cat at <b><code>POST /kittens</code></b> and delete one at <b><code>DELETE /kittens/:id</code></b></p>
      <p>Every kitten route requires <code>Authorization: Bearer &lt;token&gt;</code></p>
    "#,
    )
}
