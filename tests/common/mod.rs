#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use quizsmith::builder::BankBuilder;
use quizsmith::store::Store;
use quizsmith::AppState;

/// A unique, existing output directory per call so tests never race on the
/// same bank files.
pub fn temp_output_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir =
        std::env::temp_dir().join(format!("quizsmith_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).expect("failed to create test output dir");
    dir
}

pub fn test_state() -> AppState {
    AppState {
        builder: Arc::new(BankBuilder::new()),
        store: Store::seeded(),
        output_dir: temp_output_dir(),
        secure_cookies: false,
    }
}

pub fn app() -> (axum::Router, AppState) {
    let state = test_state();
    (quizsmith::router(state.clone()), state)
}
