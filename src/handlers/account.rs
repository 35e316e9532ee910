use axum::extract::{Form, State};
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::rejections::{AppError, ResultExt};
use crate::views::account as account_views;
use crate::{names, utils, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::LOGIN_URL, get(login_page).post(login_post))
        .route(names::LOGOUT_URL, post(logout_post))
}

async fn login_page() -> maud::Markup {
    views::page("Log In", account_views::login(account_views::LoginState::NoError))
}

#[derive(Deserialize)]
struct LoginPost {
    username: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Form(body): Form<LoginPost>,
) -> Result<Response, AppError> {
    if !state.store.verify_credentials(&body.username, &body.password) {
        return Ok(views::page(
            "Log In",
            account_views::login(account_views::LoginState::IncorrectCredentials),
        )
        .into_response());
    }

    let token = state.store.create_session(&body.username);
    let cookie = utils::cookie(names::SESSION_COOKIE_NAME, &token, state.secure_cookies)
        .reject("could not build session cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static("/")),
        ],
        "",
    )
        .into_response())
}

async fn logout_post(
    jar: CookieJar,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = jar.get(names::SESSION_COOKIE_NAME).map(|c| c.value()) {
        state.store.remove_session(token);
    }

    let cookie = utils::clear_cookie(names::SESSION_COOKIE_NAME, state.secure_cookies)
        .reject("could not build clear cookie")?;

    Ok((
        StatusCode::SEE_OTHER,
        [
            (SET_COOKIE, cookie),
            (LOCATION, HeaderValue::from_static(names::LOGIN_URL)),
        ],
        "",
    ))
}
