use axum::extract::{Form, State};
use axum::routing::{get, post};
use axum::Router;
use maud::Markup;
use serde::Deserialize;

use crate::extractors::AuthGuard;
use crate::rejections::AppError;
use crate::store::{Role, User};
use crate::views::admin as admin_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::ADMIN_URL, get(dashboard))
        .route(names::ADMIN_USERS_URL, get(users_page).post(add_user))
        .route("/admin/users/{username}/delete", post(delete_user))
        .route(names::ADMIN_REPORTS_URL, get(reports))
        .route(names::ADMIN_ISSUES_URL, get(issues))
}

fn require_admin(user: &User) -> Result<(), AppError> {
    if user.role != Role::Admin {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

async fn dashboard(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
) -> Result<Markup, AppError> {
    require_admin(&user)?;

    let metrics = state.store.metrics();
    let logs = state.store.logs();

    Ok(views::page_with_user(
        "Admin Dashboard",
        admin_views::dashboard(&metrics, &logs),
        Some(&user.username),
    ))
}

async fn users_page(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
) -> Result<Markup, AppError> {
    require_admin(&user)?;

    Ok(views::page_with_user(
        "User Management",
        admin_views::users(&state.store.users(), None),
        Some(&user.username),
    ))
}

#[derive(Deserialize)]
struct AddUserPost {
    username: String,
    role: String,
}

async fn add_user(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    Form(body): Form<AddUserPost>,
) -> Result<Markup, AppError> {
    require_admin(&user)?;

    let role = Role::parse(&body.role).ok_or(AppError::Input("unknown role"))?;
    if body.username.trim().is_empty() {
        return Err(AppError::Input("username must not be empty"));
    }

    state.store.add_user(body.username.trim(), role);
    let message = format!("User {} added successfully.", body.username.trim());

    Ok(views::page_with_user(
        "User Management",
        admin_views::users(&state.store.users(), Some(&message)),
        Some(&user.username),
    ))
}

async fn delete_user(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
    axum::extract::Path(username): axum::extract::Path<String>,
) -> Result<Markup, AppError> {
    require_admin(&user)?;

    state.store.remove_user(&username);
    let message = format!("User {username} removed successfully.");

    Ok(views::page_with_user(
        "User Management",
        admin_views::users(&state.store.users(), Some(&message)),
        Some(&user.username),
    ))
}

async fn reports(
    AuthGuard(user): AuthGuard,
    State(state): State<AppState>,
) -> Result<Markup, AppError> {
    require_admin(&user)?;

    let metrics = state.store.metrics();
    let report = admin_views::Report {
        total_users: state.store.users().len(),
        banks_generated: metrics.banks_generated,
        cpu_usage: metrics.cpu_usage,
        memory_usage: metrics.memory_usage,
    };

    Ok(views::page_with_user(
        "Reports",
        admin_views::reports(&report),
        Some(&user.username),
    ))
}

async fn issues(AuthGuard(user): AuthGuard) -> Result<Markup, AppError> {
    require_admin(&user)?;

    Ok(views::page_with_user(
        "Issues",
        admin_views::issues(),
        Some(&user.username),
    ))
}
