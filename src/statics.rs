use std::path::Path;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use include_dir::{include_dir, Dir};

use crate::AppState;

static STATIC_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static");
const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";

async fn send_file(axum::extract::Path(path): axum::extract::Path<String>) -> Response {
    let path = Path::new(&path);
    let Some(file) = STATIC_DIR.get_file(path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let content_type = match file.path().extension() {
        Some(ext) if ext == "css" => "text/css",
        Some(ext) if ext == "svg" => "image/svg+xml",
        Some(ext) if ext == "js" => "text/javascript",
        _ => "application/octet-stream",
    };

    (
        [
            (CONTENT_TYPE, content_type),
            (CACHE_CONTROL, STATIC_CACHE_CONTROL),
        ],
        file.contents(),
    )
        .into_response()
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{*path}", get(send_file))
}
