use std::fs;
use std::path::Path;

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use log::{debug, error};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serve one request from the destination directory.
///
/// Directories answer with their `index.html`; anything missing falls
/// through to [`handle_not_found`].
pub async fn serve_static(root_dir: &Path, request: Request) -> Response {
    let serve_dir = ServeDir::new(root_dir).append_index_html_on_directories(true);

    let response = match serve_dir.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        return handle_not_found(root_dir);
    }
    response.map(Body::new)
}

/// Handle 404 errors with a custom error page if available
pub fn handle_not_found(root_dir: &Path) -> Response {
    let custom_404 = root_dir.join("404.html");
    if custom_404.is_file() {
        debug!("Using custom 404 page: {}", custom_404.display());
        match fs::read(&custom_404) {
            Ok(content) => {
                return (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    content,
                )
                    .into_response();
            }
            Err(e) => {
                error!("Error reading 404.html: {}", e);
            }
        }
    }

    (StatusCode::NOT_FOUND, "Page not found").into_response()
}
