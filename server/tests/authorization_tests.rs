//! Route rule tests: first match wins, public routes stay public, the
//! protected route challenges, the catch-all stays permissive.

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;

use common::{basic_auth, create_test_app};

#[actix_web::test]
async fn hello_is_public() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/api/hello").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Hello from the backend!");
}

#[actix_web::test]
async fn hello_with_invalid_credentials_is_not_challenged() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/hello")
        .insert_header((header::AUTHORIZATION, basic_auth("foo", "wrong")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn hello_greets_authenticated_caller() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/hello")
        .insert_header((header::AUTHORIZATION, basic_auth("foo", "bar")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Hello, foo!");
}

#[actix_web::test]
async fn user_routes_are_public() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/user/Doe/Jane")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let id = String::from_utf8_lossy(&body).to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/user/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let user: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(user["first_name"], "Jane");
    assert_eq!(user["last_name"], "Doe");
}

#[actix_web::test]
async fn unknown_user_is_404_not_401() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/api/user/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn user_routes_ignore_invalid_credentials() {
    let app = create_test_app().await;

    let req = test::TestRequest::post()
        .uri("/api/user/Doe/John")
        .insert_header((header::AUTHORIZATION, basic_auth("unknown", "nope")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn secured_without_credentials_is_challenged() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/api/secured").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let challenge = resp
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(challenge.starts_with("Basic realm="));
}

#[actix_web::test]
async fn secured_with_credentials_succeeds() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/secured")
        .insert_header((header::AUTHORIZATION, basic_auth("foo", "bar")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"You are authenticated as foo.");
}

#[actix_web::test]
async fn secured_with_wrong_password_is_challenged() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/secured")
        .insert_header((header::AUTHORIZATION, basic_auth("foo", "wrong")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unlisted_path_is_not_blocked_by_authorization() {
    let app = create_test_app().await;

    // The permissive catch-all lets the request through to the router,
    // which has no such route.
    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn unlisted_post_is_not_blocked() {
    let app = create_test_app().await;

    let req = test::TestRequest::post().uri("/anything").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
