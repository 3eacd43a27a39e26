use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::error;

use crate::server::types::DevSite;

/// Regenerate the site before a GET request reaches the file server.
///
/// The response is produced while holding read access to the tree, so no
/// other rebuild can delete files underneath it. A failed build answers
/// the request with a 500 and leaves the server running; other methods
/// are served from the current tree.
pub async fn rebuild_on_request(State(site): State<Arc<DevSite>>, request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        let _tree = site.read_tree().await;
        return next.run(request).await;
    }

    let (result, _tree) = site.rebuild().await;
    match result {
        Ok(_) => next.run(request).await,
        Err(e) => {
            error!("Failed to build site for {}: {}", request.uri(), e);
            build_failed(e.to_string())
        }
    }
}

fn build_failed(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Site build failed\n\n{}\n", message),
    )
        .into_response()
}
