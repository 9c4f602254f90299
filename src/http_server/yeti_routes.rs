//! Yeti Form Routes
//!
//! The conventional write path: `GET /yetis/new` renders the signup form,
//! `POST /yetis` validates the submission and inserts. `GET /` and
//! `GET /yetis` render the directory table (the server-side view of what
//! the GraphQL endpoint serves to API clients).

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::model::{create_yeti, Candidate, FieldError, FieldName, FieldReason, YetiError, Yeti};
use crate::store::YetiRepository;

/// Shared store handle for the form handlers
#[derive(Clone)]
pub struct YetiState {
    pub store: Arc<dyn YetiRepository>,
}

/// Yeti routes with shared state
pub fn yeti_routes(state: YetiState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/yetis", get(index_handler).post(create_handler))
        .route("/yetis/new", get(new_handler))
        .with_state(state)
}

/// Form fields as submitted by the browser
#[derive(Debug, Deserialize)]
pub struct CreateYetiForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

impl From<CreateYetiForm> for Candidate {
    fn from(form: CreateYetiForm) -> Self {
        Candidate {
            name: form.name,
            email: form.email,
            password: form.password,
            // Browsers submit blank inputs as empty strings; treat those as
            // "confirmation not supplied".
            password_confirmation: if form.password_confirmation.is_empty() {
                None
            } else {
                Some(form.password_confirmation)
            },
        }
    }
}

/// Render the empty signup form
async fn new_handler() -> Html<String> {
    Html(render_form(&[], "", ""))
}

/// Validate the submission and insert on success.
///
/// Valid: redirect to the index. Invalid: re-render the form with every
/// failing field listed. A store-level email collision after a passing
/// pre-check is a conflict, not a validation failure.
async fn create_handler(
    State(state): State<YetiState>,
    Form(form): Form<CreateYetiForm>,
) -> Response {
    let candidate = Candidate::from(form);

    match create_yeti(&candidate, state.store.as_ref()) {
        Ok(yeti) => {
            tracing::info!(id = %yeti.id, "yeti created");
            Redirect::to("/").into_response()
        }
        Err(YetiError::Invalid(failures)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_form(&failures, &candidate.name, &candidate.email)),
        )
            .into_response(),
        Err(YetiError::EmailTaken) => {
            tracing::warn!(email = %candidate.email, "insert lost uniqueness race");
            let failures = vec![FieldError::new(FieldName::Email, FieldReason::Taken)];
            (
                StatusCode::CONFLICT,
                Html(render_form(&failures, &candidate.name, &candidate.email)),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(%err, "yeti creation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

/// Render the directory table
async fn index_handler(State(state): State<YetiState>) -> Response {
    match state.store.all() {
        Ok(yetis) => Html(render_index(&yetis)).into_response(),
        Err(err) => {
            tracing::error!(%err, "listing yetis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

// ==================
// HTML Rendering
// ==================

fn render_form(failures: &[FieldError], name: &str, email: &str) -> String {
    let errors = if failures.is_empty() {
        String::new()
    } else {
        let items: String = failures
            .iter()
            .map(|f| format!("<li>{}</li>", escape_html(&f.to_string())))
            .collect();
        format!("<ul class=\"errors\">{}</ul>", items)
    };

    format!(
        "<!DOCTYPE html>\n<html><head><title>New Yeti</title></head><body>\n\
         <h1>New Yeti</h1>\n{errors}\n\
         <form action=\"/yetis\" method=\"post\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label>\n\
         <label>Email <input type=\"text\" name=\"email\" value=\"{email}\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <label>Password confirmation <input type=\"password\" name=\"password_confirmation\"></label>\n\
         <button type=\"submit\">Create Yeti</button>\n\
         </form>\n</body></html>",
        errors = errors,
        name = escape_html(name),
        email = escape_html(email),
    )
}

fn render_index(yetis: &[Yeti]) -> String {
    let rows: String = yetis
        .iter()
        .map(|y| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(&y.name),
                escape_html(&y.email)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html><head><title>Yetis</title></head><body>\n\
         <h1>Yetis</h1>\n\
         <table class=\"table\">\n\
         <thead><tr><th>Name</th><th>Email</th></tr></thead>\n\
         <tbody>{}</tbody>\n\
         </table>\n\
         <a href=\"/yetis/new\">New Yeti</a>\n</body></html>",
        rows
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
