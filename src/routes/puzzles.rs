use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use super::{AppError, AppState};
use crate::{
    error::InputError,
    puzzles::{self, Day, Options, PuzzleId},
    render::{self, Submission},
};

/// Fields of the day form, named as in the HTML
#[derive(Debug, Default, Deserialize)]
pub struct PuzzleForm {
    #[serde(rename = "selected-input")]
    pub selected_input: Option<String>,
    #[serde(rename = "raw-input")]
    pub raw_input: Option<String>,
    #[serde(rename = "input-one")]
    pub input_one: Option<String>,
    #[serde(rename = "input-two")]
    pub input_two: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/{year}/{day}", get(day_handler).post(submit_handler))
        .fallback(not_found_handler)
}

fn lookup(year: &str, day: &str) -> Result<&'static Day, AppError> {
    let path = format!("{year}/{day}");
    let id = path
        .parse::<PuzzleId>()
        .map_err(|_| AppError::BadPath(format!("/{path}")))?;
    puzzles::find(id).ok_or_else(|| AppError::UnknownDay(id.slug()))
}

/// GET /
async fn index_handler() -> Html<String> {
    Html(render::index_page())
}

/// GET /{year}/{day}
async fn day_handler(
    State(state): State<AppState>,
    Path((year, day)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let day = lookup(&year, &day)?;
    let samples = state.samples.list(day.id)?;
    Ok(Html(render::day_page(day, &samples, &Submission::default())))
}

/// POST /{year}/{day}
async fn submit_handler(
    State(state): State<AppState>,
    Path((year, day)): Path<(String, String)>,
    Form(form): Form<PuzzleForm>,
) -> Result<Response, AppError> {
    let day = lookup(&year, &day)?;
    let samples = state.samples.list(day.id)?;
    let options = Options::from_fields(form.input_one.as_deref(), form.input_two.as_deref());

    let store = state.samples.clone();
    let raw = form.raw_input.clone();
    let selected = form.selected_input.clone();
    let (status, output, raw_input) = tokio::task::spawn_blocking(move || {
        let text = match store.resolve(day.id, raw.as_deref(), selected.as_deref()) {
            Ok(text) => text,
            Err(err @ InputError::Io { .. }) => return Err(err),
            Err(err) => {
                tracing::warn!(puzzle = %day.id, error = %err, "bad puzzle input");
                return Ok((StatusCode::BAD_REQUEST, format!("Error: {err}"), String::new()));
            }
        };

        Ok(match day.run(&text, &options) {
            Ok(report) => (StatusCode::OK, report.to_string(), text),
            Err(err) => {
                tracing::warn!(puzzle = %day.id, error = %err, "puzzle failed");
                (StatusCode::UNPROCESSABLE_ENTITY, format!("Error: {err}"), text)
            }
        })
    })
    .await??;

    let html = render::day_page(
        day,
        &samples,
        &Submission {
            selected: form.selected_input.as_deref(),
            first: form.input_one.as_deref(),
            second: form.input_two.as_deref(),
            output: &output,
            raw_input: &raw_input,
            failed: !status.is_success(),
        },
    );

    Ok((status, Html(html)).into_response())
}

async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page("This page")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> (tempfile::TempDir, Router) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2023.01");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("example.txt"), "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n")
            .unwrap();
        std::fs::write(tmp.path().join("secret.txt"), "hunter2").unwrap();

        let config = ServerConfig {
            inputs_dir: tmp.path().to_path_buf(),
            ..Default::default()
        };
        let router = routes().with_state(AppState::new(Arc::new(config)));
        (tmp, router)
    }

    async fn post(router: Router, uri: &str, form: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn day_page_lists_samples() {
        let (_tmp, router) = router();
        let (status, body) = get(router, "/2023/01").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<option value=\"example.txt\">example.txt</option>"));
        assert!(body.contains("Day 01: Trebuchet?!"));
    }

    #[tokio::test]
    async fn solves_selected_sample() {
        let (_tmp, router) = router();
        let (status, body) = post(router, "/2023/01", "selected-input=example.txt&raw-input=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Part 1: 142"), "{body}");
        assert!(body.contains("treb7uchet"));
    }

    #[tokio::test]
    async fn pasted_text_wins() {
        let (_tmp, router) = router();
        let (status, body) = post(
            router,
            "/2023/01",
            "selected-input=example.txt&raw-input=two1nine%0D%0A",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Part 2: 29"), "{body}");
    }

    #[tokio::test]
    async fn rejects_bad_input() {
        let (_tmp, router) = router();
        let (status, body) = post(router.clone(), "/2023/01", "selected-input=..%2Fsecret.txt").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.contains("hunter2"));

        let (status, _) = post(router.clone(), "/2023/01", "selected-input=nope.txt").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post(router, "/2023/01", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn puzzle_errors_are_unprocessable() {
        let (_tmp, router) = router();
        let (status, body) = post(router, "/2023/02", "raw-input=Game+one%3A+3+blue").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Error: line 1"), "{body}");
    }

    #[tokio::test]
    async fn unsolved_and_bogus_days() {
        let (_tmp, router) = router();
        let (status, body) = get(router.clone(), "/2023/16").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not solved yet"));
        assert!(body.contains("2023.16"));

        let (status, _) = get(router.clone(), "/2023/26").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(router, "/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
