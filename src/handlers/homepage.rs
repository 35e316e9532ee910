use axum::extract::{Form, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::builder::{BuildError, DEFAULT_OPTION_COUNT};
use crate::rejections::{AppError, ResultExt};
use crate::views::homepage as homepage_views;
use crate::{names, views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(names::GENERATE_URL, post(generate))
        .route("/download/{filename}", get(download))
}

async fn index() -> maud::Markup {
    views::page("Question Builder", homepage_views::builder_form(None))
}

fn default_option_count() -> usize {
    DEFAULT_OPTION_COUNT
}

#[derive(Deserialize)]
struct GeneratePost {
    topic: String,
    difficulty: String,
    num_questions: usize,
    #[serde(default = "default_option_count")]
    num_options: usize,
}

async fn generate(
    State(state): State<AppState>,
    Form(body): Form<GeneratePost>,
) -> Result<Response, AppError> {
    if !(names::MIN_QUESTION_COUNT..=names::MAX_QUESTION_COUNT).contains(&body.num_questions) {
        return Ok(views::page(
            "Question Builder",
            homepage_views::builder_form(Some(
                "Question count must be between 1 and 50.",
            )),
        )
        .into_response());
    }
    if body.num_options > names::MAX_OPTION_COUNT {
        return Ok(views::page(
            "Question Builder",
            homepage_views::builder_form(Some("Option count must be between 1 and 8.")),
        )
        .into_response());
    }

    let bank = match state.builder.build(
        &mut rand::thread_rng(),
        &body.topic,
        &body.difficulty,
        body.num_questions,
        body.num_options,
    ) {
        Ok(bank) => bank,
        Err(e @ (BuildError::EmptyPool { .. } | BuildError::InvalidOptionCount(_))) => {
            tracing::debug!("rejected build request: {e}");
            return Ok(views::page(
                "Question Builder",
                homepage_views::builder_form(Some(
                    "Unknown topic or difficulty, or too few options.",
                )),
            )
            .into_response());
        }
        Err(e) => return Err(e).reject("could not build question bank"),
    };

    let filename = names::bank_filename(&body.topic, &body.difficulty);
    state
        .builder
        .persist(&bank, state.output_dir.join(&filename))
        .reject("could not persist question bank")?;

    state.store.record_bank(&body.topic, &body.difficulty);

    Ok(views::page(
        "Question Bank",
        homepage_views::bank_view(&body.topic, &body.difficulty, &filename, &bank),
    )
    .into_response())
}

async fn download(
    State(state): State<AppState>,
    axum::extract::Path(filename): axum::extract::Path<String>,
) -> Result<Response, AppError> {
    // The output directory is flat; anything path-like is not ours.
    if filename.contains(['/', '\\']) || filename.contains("..") {
        return Err(AppError::Input("invalid filename"));
    }

    let path = state.output_dir.join(&filename);
    let contents = match tokio::fs::read(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(AppError::NotFound),
        Err(e) => return Err(e).reject("could not read question bank file"),
    };

    let disposition = format!("attachment; filename=\"{filename}\"");
    Ok((
        [
            (CONTENT_TYPE, "application/json".to_owned()),
            (CONTENT_DISPOSITION, disposition),
        ],
        contents,
    )
        .into_response())
}
