//! HTTP routes: the lookup form and its result page

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::CityGuideError;
use crate::guide::CityGuide;
use crate::models::CityQuery;

pub mod pages;

pub use pages::Pages;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub guide: CityGuide,
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(guide: CityGuide, pages: Pages) -> Self {
        Self {
            guide,
            pages: Arc::new(pages),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CityForm {
    pub city: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(lookup))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    state.pages.index().map(Html).map_err(internal_error)
}

async fn lookup(
    State(state): State<AppState>,
    Form(form): Form<CityForm>,
) -> Result<Html<String>, StatusCode> {
    let query = CityQuery::new(form.city);
    let info = state.guide.lookup(&query).await.map_err(internal_error)?;
    state
        .pages
        .result(&query, &info)
        .map(Html)
        .map_err(internal_error)
}

fn internal_error(err: CityGuideError) -> StatusCode {
    tracing::error!(error = %err, "Request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}
