//! Cross-origin tests: preflight succeeds without credentials, responses
//! from every path carry the cross-origin headers.

mod common;

use actix_web::http::{header, Method, StatusCode};
use actix_web::test;

use common::{basic_auth, create_test_app};

#[actix_web::test]
async fn preflight_succeeds_without_credentials() {
    let app = create_test_app().await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/secured")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    // No challenge: preflight never reaches the authorizer.
    assert!(resp.headers().get(header::WWW_AUTHENTICATE).is_none());
}

#[actix_web::test]
async fn preflight_advertises_methods_and_max_age() {
    let app = create_test_app().await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/user/Doe/Jane")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|value| value.to_str().ok()),
        Some("GET, HEAD, POST")
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|value| value.to_str().ok()),
        Some("authorization")
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_MAX_AGE)
            .and_then(|value| value.to_str().ok()),
        Some("1800")
    );
}

#[actix_web::test]
async fn preflight_for_unlisted_method_is_rejected() {
    let app = create_test_app().await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/user/1")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn cross_origin_request_carries_headers() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/hello")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[actix_web::test]
async fn challenge_response_carries_headers_too() {
    let app = create_test_app().await;

    // Browsers need the cross-origin headers on the 401 to read its status.
    let req = test::TestRequest::get()
        .uri("/api/secured")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[actix_web::test]
async fn authenticated_cross_origin_request_succeeds() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/api/secured")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::AUTHORIZATION, basic_auth("foo", "bar")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
