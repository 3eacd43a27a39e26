use std::sync::Arc;

use axum::{extract::Request, middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::server::handlers::serve_static;
use crate::server::middleware::rebuild_on_request;
use crate::server::types::DevSite;

/// Create the router for the development server.
///
/// Every path is a static file lookup in the destination directory,
/// preceded by a full rebuild of the site.
pub fn create_app(site: Arc<DevSite>) -> Router {
    let destination = site.destination().to_path_buf();

    Router::new()
        .fallback(move |request: Request| {
            let destination = destination.clone();
            async move { serve_static(&destination, request).await }
        })
        .layer(middleware::from_fn_with_state(site, rebuild_on_request))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSource, DescriptorFile};
    use crate::content::SiteConfig;
    use crate::utils::error::PixifyResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request as HttpRequest, StatusCode};
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn write(root: &Path, name: &str, content: &str) {
        let path = root.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn dev_site(tmp: &TempDir) -> Arc<DevSite> {
        let src = tmp.path().join("src");
        write(
            &src,
            "pq.toml",
            "PAGES = [\"about.html\"]\nSTATIC_DIRECTORIES = [\"static\"]\nBLOG_POSTS = [[\"blog/first.html\", \"First\", \"2015-01-30\"]]\n",
        );
        write(&src, "index.html", "{% for post in blog_posts %}{{ post.title }}{% endfor %}");
        write(&src, "blog/post.html", "<h1>{{ blog_post.title }}</h1>{{ blog_post.content }}");
        write(&src, "blog/first.html", "first body");
        write(&src, "about.html", "about v1");
        write(&src, "static/app.js", "let x = 1;");

        let source = Arc::new(DescriptorFile::new(&src));
        Arc::new(DevSite::new(source, tmp.path().join("dst")))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_rebuilds_before_serving() {
        let tmp = TempDir::new().unwrap();
        let site = dev_site(&tmp);
        let app = create_app(site);

        let (status, body) = get(app.clone(), "/about.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "about v1");

        write(&tmp.path().join("src"), "about.html", "about v2");
        write(&tmp.path().join("src"), "blog/first.html", "edited body");

        let (_, body) = get(app.clone(), "/about.html").await;
        assert_eq!(body, "about v2");
        let (_, body) = get(app, "/blog/first.html").await;
        assert_eq!(body, "<h1>First</h1>edited body");
    }

    #[tokio::test]
    async fn test_root_serves_listing_index() {
        let tmp = TempDir::new().unwrap();
        let app = create_app(dev_site(&tmp));

        let (status, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "First");

        let (status, body) = get(app, "/static/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "let x = 1;");
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let tmp = TempDir::new().unwrap();
        let app = create_app(dev_site(&tmp));

        let (status, body) = get(app, "/nope.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Page not found");
    }

    #[tokio::test]
    async fn test_custom_404_page() {
        let tmp = TempDir::new().unwrap();
        let site = dev_site(&tmp);
        write(&tmp.path().join("src"), "pq.toml", "PAGES = [\"404.html\"]\n");
        write(&tmp.path().join("src"), "404.html", "<p>lost</p>");
        let app = create_app(site);

        let (status, body) = get(app, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "<p>lost</p>");
    }

    #[tokio::test]
    async fn test_build_failure_is_500_and_server_recovers() {
        let tmp = TempDir::new().unwrap();
        let app = create_app(dev_site(&tmp));
        let src = tmp.path().join("src");

        write(&src, "about.html", "{{ nope.missing }}");
        let (status, body) = get(app.clone(), "/about.html").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("about.html"));

        write(&src, "about.html", "fixed");
        let (status, body) = get(app, "/about.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "fixed");
    }

    #[tokio::test]
    async fn test_configuration_edits_are_picked_up() {
        let tmp = TempDir::new().unwrap();
        let app = create_app(dev_site(&tmp));
        let src = tmp.path().join("src");

        let (status, _) = get(app.clone(), "/contact.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        write(&src, "contact.html", "mail me");
        write(&src, "pq.toml", "PAGES = [\"about.html\", \"contact.html\"]\n");
        let (status, body) = get(app, "/contact.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "mail me");
    }

    #[tokio::test]
    async fn test_non_get_skips_rebuild() {
        let tmp = TempDir::new().unwrap();
        let site = dev_site(&tmp);
        let app = create_app(site.clone());

        let request = HttpRequest::builder()
            .method(Method::HEAD)
            .uri("/about.html")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!site.destination().join("about.html").exists());
    }

    /// Descriptor source that records how many loads overlap
    #[derive(Debug)]
    struct CountingSource {
        inner: DescriptorFile,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        loads: AtomicUsize,
    }

    impl ConfigSource for CountingSource {
        fn load(&self) -> PixifyResult<SiteConfig> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.loads.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(10));
            let config = self.inner.load();
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            config
        }
    }

    fn static_heavy_site(src: &Path, files: usize) {
        write(src, "pq.toml", "STATIC_DIRECTORIES = [\"static\"]\n");
        for i in 0..files {
            write(src, &format!("static/f{}.css", i), &format!("/* {} */", i));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_gets_never_see_a_half_copied_tree() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        static_heavy_site(&src, 200);
        let source = Arc::new(DescriptorFile::new(&src));
        let app = create_app(Arc::new(DevSite::new(source, tmp.path().join("dst"))));

        let handles: Vec<_> = (0..30)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move { get(app, &format!("/static/f{}.css", i)).await })
            })
            .collect();

        let mut failures = 0;
        for (i, handle) in handles.into_iter().enumerate() {
            let (status, body) = handle.await.unwrap();
            if status != StatusCode::OK || body != format!("/* {} */", i) {
                failures += 1;
            }
        }
        assert_eq!(failures, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_overlapping_requests_rebuild_one_at_a_time() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        static_heavy_site(&src, 20);
        let source = Arc::new(CountingSource {
            inner: DescriptorFile::new(&src),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
        });
        let site = Arc::new(DevSite::new(source.clone(), tmp.path().join("dst")));
        let app = create_app(site);

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move { get(app, &format!("/static/f{}.css", i)).await })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().0, StatusCode::OK);
        }

        assert_eq!(source.loads.load(Ordering::SeqCst), 10);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    }

    /// Collects the targets of every log record
    struct CapturedTargets(std::sync::Mutex<Vec<String>>);

    impl log::Log for CapturedTargets {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            self.0.lock().unwrap().push(record.target().to_string());
        }

        fn flush(&self) {}
    }

    static CAPTURED: CapturedTargets = CapturedTargets(std::sync::Mutex::new(Vec::new()));

    #[tokio::test]
    async fn test_request_trace_reaches_log_backend() {
        log::set_logger(&CAPTURED).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        let tmp = TempDir::new().unwrap();
        let (status, _) = get(create_app(dev_site(&tmp)), "/about.html").await;
        assert_eq!(status, StatusCode::OK);

        let targets = CAPTURED.0.lock().unwrap();
        assert!(targets.iter().any(|t| t.starts_with("tower_http::trace")));
    }
}
