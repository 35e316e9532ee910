mod common;

use axum::body::Body;
use axum::http::{header::SET_COOKIE, Method, Request, StatusCode};
use quizsmith::names;
use tower::ServiceExt;

#[tokio::test]
async fn admin_routes_reject_direct_access_without_session_cookie() {
    let (app, _state) = common::app();

    let cases = [
        (Method::GET, "/admin"),
        (Method::GET, "/admin/users"),
        (Method::GET, "/admin/reports"),
        (Method::GET, "/admin/issues"),
        (Method::POST, "/admin/users/ghost/delete"),
    ];

    for (method, uri) in cases {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "expected UNAUTHORIZED for {uri}",
        );
    }
}

#[tokio::test]
async fn admin_routes_accept_requests_with_valid_admin_session() {
    let (app, state) = common::app();
    let session = state.store.create_session("admin");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .header(
            "cookie",
            format!("{}={}", names::SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_admin_sessions_are_forbidden() {
    let (app, state) = common::app();
    let session = state.store.create_session("employee");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .header(
            "cookie",
            format!("{}={}", names::SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_with_valid_credentials_sets_a_session_cookie() {
    let (app, _state) = common::app();

    let req = Request::builder()
        .method(Method::POST)
        .uri(names::LOGIN_URL)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=admin&password=adminpass"))
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .expect("cookie must be ascii");
    assert!(cookie.starts_with(&format!("{}=", names::SESSION_COOKIE_NAME)));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn login_with_bad_credentials_sets_no_cookie() {
    let (app, _state) = common::app();

    let req = Request::builder()
        .method(Method::POST)
        .uri(names::LOGIN_URL)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=admin&password=wrong"))
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn logout_clears_the_session() {
    let (app, state) = common::app();
    let session = state.store.create_session("admin");

    let req = Request::builder()
        .method(Method::POST)
        .uri(names::LOGOUT_URL)
        .header(
            "cookie",
            format!("{}={}", names::SESSION_COOKIE_NAME, session),
        )
        .body(Body::empty())
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(state.store.user_by_session(&session).is_none());
}
