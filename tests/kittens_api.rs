mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{
    SECRET, bearer, body_json, body_text, create_tom, post_raw, send, test_router, token_for,
};
use cyber_kittens::services::auth::TokenIssuer;

#[tokio::test]
async fn home_is_public_html() {
    let app = test_router();
    let res = send(&app, "GET", "/", None, None).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert!(body_text(res).await.contains("Cyber Kittens"));
}

#[tokio::test]
async fn health_is_public() {
    let app = test_router();
    let res = send(&app, "GET", "/health", None, None).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn protected_routes_require_authorization_header() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    for (method, uri, body) in [
        ("GET", location.as_str(), None),
        ("DELETE", location.as_str(), None),
        ("POST", "/kittens", Some(json!({"name": "Tom", "age": 3, "color": "gray"}))),
    ] {
        let res = send(&app, method, uri, None, body).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(res.headers()[header::WWW_AUTHENTICATE], "Bearer");
        assert_eq!(body_text(res).await, "Unauthorized");
    }
}

#[tokio::test]
async fn malformed_authorization_header_is_401() {
    let app = test_router();
    let location = create_tom(&app, 1).await;
    let token = token_for(1);

    for value in ["Bearer", "Token abc", token.as_str(), "Basic dXNlcjpwYXNz"] {
        let res = send(&app, "GET", &location, Some(value), None).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{value}");
        assert_eq!(body_text(res).await, "Invalid token");
    }
}

#[tokio::test]
async fn wrongly_signed_or_expired_token_is_401() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    let forged = TokenIssuer::new("not-the-secret", 600).issue(1, None).unwrap();
    let expired = TokenIssuer::new(SECRET, 600)
        .sign(&json!({"id": 1, "exp": chrono::Utc::now().timestamp() - 3600}))
        .unwrap();

    for token in [forged, expired, "abc.def.ghi".to_string()] {
        let res = send(&app, "GET", &location, Some(&bearer(&token)), None).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(res).await, "Invalid token");
    }
}

#[tokio::test]
async fn token_not_yet_valid_is_401() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    let now = chrono::Utc::now().timestamp();
    let early = TokenIssuer::new(SECRET, 600)
        .sign(&json!({"id": 1, "nbf": now + 3600, "exp": now + 7200}))
        .unwrap();

    let res = send(&app, "GET", &location, Some(&bearer(&early)), None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers()[header::WWW_AUTHENTICATE], "Bearer");
    assert_eq!(body_text(res).await, "Invalid token");
}

#[tokio::test]
async fn token_with_audience_is_accepted() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    let token = TokenIssuer::new(SECRET, 600)
        .sign(&json!({"id": 1, "aud": "kittens", "exp": chrono::Utc::now().timestamp() + 600}))
        .unwrap();

    let res = send(&app, "GET", &location, Some(&bearer(&token)), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({"name": "Tom", "age": 3, "color": "gray"})
    );
}

#[tokio::test]
async fn invalid_token_is_rejected_before_lookup() {
    let app = test_router();
    let forged = TokenIssuer::new("not-the-secret", 600).issue(1, None).unwrap();

    // 存在しない id でも 404 ではなく 401
    let res = send(&app, "GET", "/kittens/doesnotexist", Some(&bearer(&forged)), None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_returns_201_with_public_fields_only() {
    let app = test_router();
    let res = send(
        &app,
        "POST",
        "/kittens",
        Some(&bearer(&token_for(1))),
        Some(json!({"name": "Tom", "age": 3, "color": "gray"})),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert!(location.starts_with("/kittens/"));
    assert_eq!(
        body_json(res).await,
        json!({"name": "Tom", "age": 3, "color": "gray"})
    );
}

#[tokio::test]
async fn owner_can_read_and_others_get_401() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    let res = send(&app, "GET", &location, Some(&bearer(&token_for(1))), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({"name": "Tom", "age": 3, "color": "gray"})
    );

    let res = send(&app, "GET", &location, Some(&bearer(&token_for(2))), None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_text(res).await;
    assert_eq!(body, "Unauthorized");
    assert!(!body.contains("Tom"));
}

#[tokio::test]
async fn foreign_delete_is_401_and_keeps_the_kitten() {
    let app = test_router();
    let location = create_tom(&app, 1).await;

    let res = send(&app, "DELETE", &location, Some(&bearer(&token_for(2))), None).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = send(&app, "GET", &location, Some(&bearer(&token_for(1))), None).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_then_get_is_404_and_second_delete_is_404() {
    let app = test_router();
    let location = create_tom(&app, 1).await;
    let owner = bearer(&token_for(1));

    let res = send(&app, "DELETE", &location, Some(&owner), None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(body_text(res).await.is_empty());

    for user_id in [1, 2] {
        let res = send(&app, "GET", &location, Some(&bearer(&token_for(user_id))), None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(res).await, "Kitten not found");
    }

    let res = send(&app, "DELETE", &location, Some(&owner), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_ids_are_404_for_any_identity() {
    let app = test_router();
    let location = create_tom(&app, 1).await;
    // 別の kitten を消して、有効だが存在しない公開 ID を作る
    let gone = create_tom(&app, 1).await;
    send(&app, "DELETE", &gone, Some(&bearer(&token_for(1))), None).await;

    for uri in [gone.as_str(), "/kittens/not-a-real-id", "/kittens/1"] {
        for user_id in [1, 2] {
            let token = bearer(&token_for(user_id));
            let res = send(&app, "GET", uri, Some(&token), None).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {uri}");
            let res = send(&app, "DELETE", uri, Some(&token), None).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
        }
    }

    // 既存の kitten は残っている
    let res = send(&app, "GET", &location, Some(&bearer(&token_for(1))), None).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_bodies_are_400() {
    let app = test_router();
    let token = bearer(&token_for(1));

    for body in [
        json!({"name": "Tom", "age": "three", "color": "gray"}),
        json!({"name": "Tom", "age": 3}),
        json!({"name": "", "age": 3, "color": "gray"}),
        json!({"name": "Tom", "age": -2, "color": "gray"}),
    ] {
        let res = send(&app, "POST", "/kittens", Some(&token), Some(body.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");

        let json = body_json(res).await;
        assert_eq!(json["name"], "ValidationError");
        assert!(json["error"].is_string());
        assert_eq!(json["error"], json["message"]);
    }
}

#[tokio::test]
async fn form_encoded_create_is_accepted() {
    let app = test_router();
    let auth = bearer(&token_for(1));
    let res = post_raw(
        &app,
        &auth,
        "application/x-www-form-urlencoded",
        "name=Tom&age=3&color=gray",
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert_eq!(
        body_json(res).await,
        json!({"name": "Tom", "age": 3, "color": "gray"})
    );

    let res = send(&app, "GET", &location, Some(&auth), None).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_form_body_is_400() {
    let app = test_router();
    let auth = bearer(&token_for(1));

    for body in ["name=Tom&age=three&color=gray", "name=Tom&age=3", "name=%20&age=3&color=gray"] {
        let res = post_raw(&app, &auth, "application/x-www-form-urlencoded", body).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(res).await["name"], "ValidationError");
    }
}

#[tokio::test]
async fn non_json_body_is_rejected_with_error_body() {
    let app = test_router();
    let res = post_raw(&app, &bearer(&token_for(1)), "text/plain", "name=Tom").await;

    assert_eq!(res.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let json = body_json(res).await;
    assert_eq!(json["name"], "RequestRejected");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = test_router();
    let res = send(&app, "GET", "/health", None, None).await;

    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.headers()["x-frame-options"], "DENY");
}
