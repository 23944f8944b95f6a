//! HTML pages and error-to-status mapping.

use std::error::Error;

use askama::Template;

use rsswitch_app::services::switch_service::SwitchOutcome;
use rsswitch_domain::error::SwitchError;
use rsswitch_domain::selection::{Group, SocketSlot, StateSlot};

use crate::error::RequestError;
use crate::response::{CgiResponse, Status};

/// Confirmation page for a dispatched code.
#[derive(Template)]
#[template(path = "switch.html")]
pub struct SwitchPage {
    group: Group,
    socket: SocketSlot,
    state: StateSlot,
}

impl From<&SwitchOutcome> for SwitchPage {
    fn from(outcome: &SwitchOutcome) -> Self {
        Self {
            group: outcome.selection.group,
            socket: outcome.selection.socket.clone(),
            state: outcome.selection.state,
        }
    }
}

/// Error page. `causes` lists the source chain below `message`.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    status: Status,
    message: String,
    causes: Vec<String>,
}

impl ErrorPage {
    fn new(status: Status, err: &dyn Error) -> Self {
        Self {
            status,
            message: err.to_string(),
            causes: source_chain(err),
        }
    }
}

/// Messages of every error below `err`, outermost first.
#[must_use]
pub fn source_chain(err: &dyn Error) -> Vec<String> {
    std::iter::successors(err.source(), |&cause| cause.source())
        .map(ToString::to_string)
        .collect()
}

/// Render a page, falling back to a bare 500 if the template fails.
fn render(status: Status, template: &impl Template) -> CgiResponse {
    match template.render() {
        Ok(body) => CgiResponse::html(status, body),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            CgiResponse::html(Status::InternalServerError, "internal server error")
        }
    }
}

/// `200` page reporting the group, socket, and state that were sent.
#[must_use]
pub fn success(outcome: &SwitchOutcome) -> CgiResponse {
    render(Status::Ok, &SwitchPage::from(outcome))
}

/// Map a use-case failure to a response.
///
/// Selection problems are the client's fault and get a `400`. Log or device
/// failures get a `500` whose body carries the full cause chain for the
/// operator.
#[must_use]
pub fn switch_error(err: &SwitchError) -> CgiResponse {
    let status = if err.is_client_error() {
        tracing::warn!(error = %err, causes = ?source_chain(err), "rejected submission");
        Status::BadRequest
    } else {
        tracing::error!(error = %err, causes = ?source_chain(err), "dispatch failed");
        Status::InternalServerError
    };
    render(status, &ErrorPage::new(status, err))
}

/// Map a request decoding failure to a response.
#[must_use]
pub fn request_error(err: &RequestError) -> CgiResponse {
    let status = match err {
        RequestError::UnsupportedMethod(_) => Status::MethodNotAllowed,
        RequestError::UnsupportedContentType(_) => Status::UnsupportedMediaType,
        RequestError::InvalidContentLength(_)
        | RequestError::BodyTooLarge { .. }
        | RequestError::ShortBody { .. } => Status::BadRequest,
        RequestError::Read(_) => Status::InternalServerError,
    };
    tracing::warn!(error = %err, status = status.code(), "rejected request");
    render(status, &ErrorPage::new(status, err))
}

/// `500` page for failures outside a request, such as bad configuration.
#[must_use]
pub fn internal_error(err: &dyn Error) -> CgiResponse {
    render(
        Status::InternalServerError,
        &ErrorPage::new(Status::InternalServerError, err),
    )
}
