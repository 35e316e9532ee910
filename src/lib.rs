pub mod builder;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod rejections;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use builder::BankBuilder;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<BankBuilder>,
    pub store: Store,
    pub output_dir: PathBuf,
    pub secure_cookies: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::account::routes())
        .merge(handlers::admin::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
