//! Tower locale-resolution middleware.
//!
//! `LocaleLayer` and `LocaleService` wrap the page router. The first
//! path segment must name a supported locale; it is parsed once here and
//! handed to handlers through request extensions. Anything else is
//! answered with the localized 404 page before the inner service runs.
//! The bare root path passes through untouched so the redirect route can
//! claim it.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::Request;
use tower::{Layer, Service};

use liftgate_core::Locale;

use crate::routes::not_found_page;
use crate::state::AppState;

/// Tower `Layer` that wraps services with locale resolution.
#[derive(Clone)]
pub struct LocaleLayer {
    state: Arc<AppState>,
}

impl LocaleLayer {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl<S> Layer<S> for LocaleLayer {
    type Service = LocaleService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LocaleService {
            inner,
            state: self.state.clone(),
        }
    }
}

/// Tower `Service` that resolves the locale prefix before forwarding.
///
/// On a valid prefix, inserts [`Locale`] into request extensions where
/// it's available to downstream handlers.
#[derive(Clone)]
pub struct LocaleService<S> {
    inner: S,
    state: Arc<AppState>,
}

impl<S> Service<Request<Body>> for LocaleService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let state = self.state.clone();

        let segment = first_segment(req.uri().path()).map(str::to_owned);

        Box::pin(async move {
            let segment = match segment {
                // Bare "/" belongs to the redirect route
                None => {
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    return Ok(resp.into_response());
                }
                Some(s) => s,
            };

            match segment.parse::<Locale>() {
                Ok(locale) => {
                    req.extensions_mut().insert(locale);
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    Ok(resp.into_response())
                }
                Err(err) => {
                    log::debug!("rejected locale prefix {segment:?}: {err}");
                    Ok(not_found_page(&state, Locale::DEFAULT))
                }
            }
        })
    }
}

/// First path segment, if the path has one.
fn first_segment(path: &str) -> Option<&str> {
    path.strip_prefix('/')
        .unwrap_or(path)
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use liftgate_core::SiteConfig;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[test]
    fn test_first_segment_variants() {
        assert_eq!(first_segment("/"), None);
        assert_eq!(first_segment(""), None);
        assert_eq!(first_segment("/tr"), Some("tr"));
        assert_eq!(first_segment("/tr/"), Some("tr"));
        assert_eq!(first_segment("/en/about"), Some("en"));
        assert_eq!(first_segment("/api/demo"), Some("api"));
    }

    fn test_state() -> Arc<AppState> {
        let mut config = SiteConfig::default();
        config.content.messages_dir = "/nonexistent/liftgate-msgs".into();
        AppState::new(config)
    }

    /// Mock inner service that captures the resolved locale.
    #[derive(Clone)]
    struct MockService {
        captured: Arc<Mutex<Option<Locale>>>,
    }

    impl MockService {
        fn new() -> Self {
            Self {
                captured: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl Service<Request<Body>> for MockService {
        type Response = axum::response::Response;
        type Error = Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: Request<Body>) -> Self::Future {
            let captured = self.captured.clone();
            Box::pin(async move {
                let locale = req.extensions().get::<Locale>().copied();
                *captured.lock().unwrap() = locale;
                Ok((StatusCode::OK, "ok").into_response())
            })
        }
    }

    #[tokio::test]
    async fn test_valid_locale_passes_and_injects() {
        let mock = MockService::new();
        let captured = mock.captured.clone();
        let service = LocaleLayer::new(test_state()).layer(mock);

        let req = Request::builder().uri("/de/about").body(Body::empty()).unwrap();
        let resp = service.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*captured.lock().unwrap(), Some(Locale::De));
    }

    #[tokio::test]
    async fn test_unknown_locale_is_404() {
        let mock = MockService::new();
        let captured = mock.captured.clone();
        let service = LocaleLayer::new(test_state()).layer(mock);

        let req = Request::builder().uri("/fr/about").body(Body::empty()).unwrap();
        let resp = service.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        // Inner service never ran
        assert_eq!(*captured.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn test_root_passes_through_without_locale() {
        let mock = MockService::new();
        let captured = mock.captured.clone();
        let service = LocaleLayer::new(test_state()).layer(mock);

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = service.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*captured.lock().unwrap(), None);
    }
}
