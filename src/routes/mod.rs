pub mod calendar;
pub mod workouts;

use std::path::Path;

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use wkplanner_core::PlannerError;

use crate::state::AppState;

/// Build the full application: pages, form endpoints and static assets.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(calendar::router())
        .merge(workouts::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> AppError {
    PlannerError::NotFound(uri.path().to_string()).into()
}

async fn method_not_allowed() -> AppError {
    PlannerError::MethodNotAllowed.into()
}

/// Convert errors to plain-text HTTP responses
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<PlannerError>() {
            Some(PlannerError::InvalidField { .. }) => StatusCode::BAD_REQUEST,
            Some(PlannerError::MethodNotAllowed) => StatusCode::METHOD_NOT_ALLOWED,
            Some(PlannerError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self.0);
        }
        (status, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tempfile::TempDir;
    use tower::ServiceExt;

    pub(crate) struct TestApp {
        pub app: Router,
        pub state: AppState,
        // Dropping this removes the database
        pub _dir: TempDir,
    }

    pub(crate) fn test_app() -> TestApp {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("static/js")).unwrap();
        std::fs::write(dir.path().join("static/js/main.js"), "// test asset\n").unwrap();

        let state = AppState::new(dir.path().join("workouts.db")).unwrap();
        let app = router(state.clone(), &dir.path().join("static"));
        TestApp {
            app,
            state,
            _dir: dir,
        }
    }

    pub(crate) async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, String) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, location, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub(crate) fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub(crate) fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn error_statuses_follow_the_taxonomy() {
        let cases = [
            (PlannerError::invalid("date", "bad"), StatusCode::BAD_REQUEST),
            (PlannerError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (PlannerError::NotFound("/x".into()), StatusCode::NOT_FOUND),
            (
                PlannerError::Io(std::io::Error::other("disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (PlannerError::Config("nope".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn foreign_errors_are_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_is_404_plain_text() {
        let t = test_app();
        let (status, _, body) = send(&t.app, get("/nowhere")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("/nowhere"));
    }

    #[tokio::test]
    async fn static_assets_are_served() {
        let t = test_app();
        let (status, _, body) = send(&t.app, get("/static/js/main.js")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "// test asset\n");
    }
}
