use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{html, Markup};

use crate::views;

/// Application-level failures a handler can answer with.
#[derive(Debug)]
pub enum AppError {
    Internal(color_eyre::Report),
    Unauthorized,
    Forbidden,
    NotFound,
    Input(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Internal(report) => {
                tracing::error!("internal error: {report:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Input(message) => {
                tracing::debug!("input error: {message}");
                (StatusCode::BAD_REQUEST, *message)
            }
        };

        (code, error_page(message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
        },
    )
}

/// Shortcuts for folding handler-level `Result`s into [`AppError`].
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, AppError>;
    fn reject_input(self, context: &'static str) -> Result<T, AppError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<color_eyre::Report>,
{
    fn reject(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Internal(e.into().wrap_err(context)))
    }

    fn reject_input(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            let report: color_eyre::Report = e.into();
            tracing::debug!("{context}: {report:?}");
            AppError::Input(context)
        })
    }
}
