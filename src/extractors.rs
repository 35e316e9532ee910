use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::{names, rejections::AppError, store::User, AppState};

/// Guard extractor that resolves the session cookie against the store.
/// Carries the authenticated user's info for use in handlers.
pub struct AuthGuard(pub User);

impl FromRequestParts<AppState> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        if let Some(token) = jar.get(names::SESSION_COOKIE_NAME).map(|c| c.value()) {
            if let Some(user) = state.store.user_by_session(token) {
                return Ok(AuthGuard(user));
            }
        }

        Err(AppError::Unauthorized)
    }
}
