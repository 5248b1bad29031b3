//! Server-rendered contact pages.
//!
//! ```text
//! GET  /              list + add form
//! POST /add           form: name, phone, email, type
//! GET  /update/{id}   edit form
//! POST /update/{id}   form: name, phone, email, type, submit
//! ```
//!
//! Successful submissions redirect to `/` with `303 See Other`. Invalid ones
//! re-render the form with per-field messages and status 400.

use std::fmt;

use actix_web::error::PathError;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, get, post, web};
use tracing::debug;

use crate::domain::{ContactDraft, ContactId, Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::error::{raw_id, redact_if_internal, status_for};
use crate::inbound::http::forms::{ContactForm, RejectedForm};
use crate::inbound::http::render::{self, FormView};
use crate::inbound::http::state::HttpState;

/// Domain error rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct PageError(Error);

impl From<Error> for PageError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn page_title(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "Invalid request",
        ErrorCode::NotFound => "Not found",
        ErrorCode::ServiceUnavailable => "Service unavailable",
        ErrorCode::InternalError => "Internal server error",
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn error_response(&self) -> HttpResponse {
        let shown = redact_if_internal(&self.0);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = shown.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder
            .content_type(ContentType::html())
            .body(render::message_page(page_title(shown.code()), shown.message()))
    }
}

type PageResult = Result<HttpResponse, PageError>;

/// Render unparsable path identifiers as the not-found page.
pub fn page_path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected page path");
    PageError::from(Error::not_found(format!("contact {} not found", raw_id(req)))).into()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

async fn render_list(state: &HttpState, status: StatusCode, add_form: &FormView) -> PageResult {
    let contacts = state.contacts.list_contacts().await?;
    Ok(html(status, render::list_page(&contacts, add_form)))
}

/// Contact list with the add form.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> PageResult {
    render_list(&state, StatusCode::OK, &FormView::default()).await
}

/// Create a contact from the add form.
#[post("/add")]
pub async fn add_contact(state: web::Data<HttpState>, form: web::Form<ContactForm>) -> PageResult {
    match form.into_inner().validate() {
        Ok(details) => {
            state.contacts_command.create_contact(details).await?;
            Ok(redirect_home())
        }
        Err(RejectedForm { values, errors }) => {
            render_list(&state, StatusCode::BAD_REQUEST, &FormView::new(values, errors)).await
        }
    }
}

/// Edit form pre-filled with the stored values.
#[get("/update/{id}")]
pub async fn edit_contact(state: web::Data<HttpState>, path: web::Path<i32>) -> PageResult {
    let id = ContactId::new(path.into_inner());
    let contact = state.contacts.fetch_contact(id).await?;
    let view = FormView::new(ContactDraft::from(contact.details().clone()), Default::default());
    Ok(html(StatusCode::OK, render::edit_page(id, &view)))
}

/// Overwrite every field of an existing contact from the edit form.
///
/// Unknown identifiers yield a 404 page before the submission is validated.
#[post("/update/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<ContactForm>,
) -> PageResult {
    let id = ContactId::new(path.into_inner());
    state.contacts.fetch_contact(id).await?;
    match form.into_inner().validate() {
        Ok(details) => {
            state.contacts_command.update_contact(id, details).await?;
            Ok(redirect_home())
        }
        Err(RejectedForm { values, errors }) => Ok(html(
            StatusCode::BAD_REQUEST,
            render::edit_page(id, &FormView::new(values, errors)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockContactsCommand, MockContactsQuery};

    fn state(query: MockContactsQuery, command: MockContactsCommand) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(query), Arc::new(command)))
    }

    async fn call(
        state: web::Data<HttpState>,
        req: actix_test::TestRequest,
    ) -> (StatusCode, Option<String>, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::PathConfig::default().error_handler(page_path_error_handler))
                .service(index)
                .service(add_contact)
                .service(edit_contact)
                .service(update_contact),
        )
        .await;
        let res = actix_test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = actix_test::read_body(res).await;
        (
            status,
            location,
            String::from_utf8(body.to_vec()).expect("utf8 body"),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn storage_failure_renders_html_error_page() {
        let mut query = MockContactsQuery::new();
        query
            .expect_list_contacts()
            .times(1)
            .return_once(|| Err(Error::internal("contact repository error: boom")));

        let (status, _, body) = call(
            state(query, MockContactsCommand::new()),
            actix_test::TestRequest::get().uri("/"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("boom"));
    }

    #[rstest]
    #[actix_web::test]
    async fn invalid_add_form_never_reaches_the_command() {
        let mut query = MockContactsQuery::new();
        query
            .expect_list_contacts()
            .times(1)
            .return_once(|| Ok(Vec::new()));
        let mut command = MockContactsCommand::new();
        command.expect_create_contact().times(0);

        let (status, location, body) = call(
            state(query, command),
            actix_test::TestRequest::post()
                .uri("/add")
                .set_form([("name", "Jane Doe"), ("email", "jane@example.com")]),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(location.is_none());
        assert!(body.contains("This field is required."));
        assert!(body.contains("value=\"Jane Doe\""));
    }

    #[rstest]
    #[actix_web::test]
    async fn update_of_unknown_contact_is_404_page() {
        let mut query = MockContactsQuery::new();
        query
            .expect_fetch_contact()
            .with(eq(ContactId::new(77)))
            .times(1)
            .return_once(|id| Err(Error::not_found(format!("contact {id} not found"))));
        let mut command = MockContactsCommand::new();
        command.expect_update_contact().times(0);

        let (status, _, body) = call(
            state(query, command),
            actix_test::TestRequest::post().uri("/update/77").set_form([
                ("name", "John Smith"),
                ("phone", "1234567890"),
                ("email", "john@example.com"),
                ("type", "Personal"),
                ("submit", "Update"),
            ]),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("contact 77 not found"));
    }

    #[rstest]
    #[case("/update/abc")]
    #[case("/update/99999999999")]
    #[actix_web::test]
    async fn unparsable_id_renders_404_page(#[case] uri: &str) {
        let (status, _, body) = call(
            state(MockContactsQuery::new(), MockContactsCommand::new()),
            actix_test::TestRequest::get().uri(uri),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<h1>Not found</h1>"));
    }
}
