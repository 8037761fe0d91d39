use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Json};

use ucs_core::{CatalogError, CourseQuery};

use crate::models::{SearchParams, SectionRow};
use crate::state::AppState;
use crate::templates::{IndexTemplate, ResultsTemplate};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ucs-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        subjects: state.catalog.subjects(),
        terms: state.catalog.terms(),
        rows: Vec::new(),
        message: String::new(),
        searched: false,
    };
    Html(template.render().expect("Template rendering failed"))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let (rows, message) = run_search(&state, &params);

    // If it's an htmx request, return just the fragment. Otherwise, return the full page.
    let is_htmx = headers.get("HX-Request").is_some();
    if is_htmx {
        let template = ResultsTemplate {
            rows,
            message,
            searched: true,
        };
        Html(template.render().expect("Template rendering failed"))
    } else {
        let template = IndexTemplate {
            subjects: state.catalog.subjects(),
            terms: state.catalog.terms(),
            rows,
            message,
            searched: true,
        };
        Html(template.render().expect("Template rendering failed"))
    }
}

pub async fn search_form(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> impl IntoResponse {
    // Treat form submissions like htmx requests by setting the header manually
    let mut headers = HeaderMap::new();
    headers.insert("HX-Request", axum::http::HeaderValue::from_static("true"));
    search(State(state), Query(params), headers).await
}

/// Run the filter and map its two non-success outcomes to user-facing text.
fn run_search(state: &AppState, params: &SearchParams) -> (Vec<SectionRow>, String) {
    let query = match CourseQuery::parse(
        params.subject.as_deref(),
        params.catalog_number.as_deref(),
        params.term.as_deref(),
    ) {
        Ok(query) => query,
        Err(CatalogError::MissingSubject) => {
            return (Vec::new(), "Please supply a subject.".to_string())
        }
        Err(err) => return (Vec::new(), err.to_string()),
    };

    let rows: Vec<SectionRow> = state
        .catalog
        .search(&query)
        .into_iter()
        .map(SectionRow::from)
        .collect();

    if rows.is_empty() {
        (
            rows,
            "No classes matched your search. Try different criteria.".to_string(),
        )
    } else {
        (rows, String::new())
    }
}
