//! Router assembly and page handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};

use liftgate_core::Locale;
use liftgate_pages::{render_not_found, Page};

use crate::middleware::LocaleLayer;
use crate::state::AppState;
use crate::{assets, demo, health};

/// Build the complete application router.
///
/// Page routes sit behind [`LocaleLayer`]; the demo API, health check,
/// and page script are mounted outside the locale scope.
pub fn build_router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(redirect_root))
        .route("/{locale}", get(locale_index))
        .route("/{locale}/", get(locale_index))
        .route("/{locale}/{page}", get(locale_page))
        .fallback(unmatched_path)
        .layer(LocaleLayer::new(state.clone()))
        .with_state(state.clone());

    let service = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/assets/demo.js", get(assets::demo_js))
        .route("/api/demo", post(demo::create_session))
        .route("/api/demo/{id}", get(demo::session_state))
        .route("/api/demo/{id}/call", post(demo::call_floor))
        .route("/api/demo/{id}/tick", post(demo::tick_session))
        .with_state(state);

    service.merge(pages)
}

/// `GET /`: send visitors to the default locale.
async fn redirect_root() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::DEFAULT))
}

/// `GET /{locale}`: the localized home page.
async fn locale_index(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> Response {
    render_page(&state, locale, Page::Home)
}

/// `GET /{locale}/{page}`: any other page under the locale.
async fn locale_page(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
    Path((_, slug)): Path<(String, String)>,
) -> Response {
    match Page::from_slug(&slug) {
        Some(page) => render_page(&state, locale, page),
        None => not_found_page(&state, locale),
    }
}

/// Fallback for deeper paths; the layer has already resolved the locale.
async fn unmatched_path(
    State(state): State<Arc<AppState>>,
    Extension(locale): Extension<Locale>,
) -> Response {
    not_found_page(&state, locale)
}

/// Render one page, or a plain 500 if the template engine fails.
fn render_page(state: &AppState, locale: Locale, page: Page) -> Response {
    let bundle = state.bundle(locale);
    match page.render(&bundle) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            log::error!("page render failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// The localized 404 page with a 404 status.
pub fn not_found_page(state: &AppState, locale: Locale) -> Response {
    let bundle = state.bundle(locale);
    match render_not_found(&bundle) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            log::error!("404 page render failed: {err}");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
    }
}
