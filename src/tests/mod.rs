
use std::{path::Path, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, Response},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{config::Config, db::DBClient, routes::create_router, AppState};

/// Data file name that loads fine but cannot be saved: its temp sibling
/// overruns the 255-byte file name limit.
pub(crate) fn unsavable_name() -> String {
    format!("{}.json", "p".repeat(220))
}

/// A router over a scratch data directory holding an empty catalog and the
/// `admin` / `secret` account.
pub(crate) async fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("properties.json"), "[]").unwrap();
    std::fs::write(
        dir.path().join("admin.json"),
        r#"{ "username": "admin", "password": "secret", "email": "a@x.com" }"#,
    )
    .unwrap();

    let app = app_for(dir.path());
    (dir, app)
}

pub(crate) fn app_for(data_dir: &Path) -> Router {
    app_with_config(Config::with_data_dir(data_dir))
}

pub(crate) fn app_with_config(config: Config) -> Router {
    let app_state = AppState {
        db_client: DBClient::from_config(&config),
    };
    create_router(Arc::new(app_state))
}

pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub(crate) async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
