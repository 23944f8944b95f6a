//! # rsswitch-adapter-cgi
//!
//! CGI/1.1 driving adapter.
//!
//! ## Responsibilities
//! - Decode the request (meta-variables + standard input) into a
//!   `FormSubmission`
//! - Call the switch use-case
//! - Map the outcome into a CGI response: an HTML confirmation page, or an
//!   error page with the matching status (`400`/`405`/`415` for bad requests,
//!   `500` when logging or the device write fails)
//!
//! Pages are rendered with askama templates from `templates/`, so every
//! interpolated value is HTML-escaped.
//!
//! ## Dependency rule
//! Depends on `rsswitch-app` (for the service and port traits) and
//! `rsswitch-domain`. Never leaks CGI details into the domain.

pub mod error;
pub mod page;
pub mod request;
pub mod response;

use std::io::Read;

use rsswitch_app::ports::{CodeLogger, DeviceWriter};
use rsswitch_app::services::switch_service::SwitchService;

pub use error::RequestError;
pub use request::CgiRequest;
pub use response::{CgiResponse, Status};

/// Run one CGI request through the service and build the response.
pub fn handle<D, L>(service: &SwitchService<D, L>, request: &CgiRequest, body: impl Read) -> CgiResponse
where
    D: DeviceWriter,
    L: CodeLogger,
{
    let form = match request.read_form(body) {
        Ok(form) => form,
        Err(err) => return page::request_error(&err),
    };
    match service.handle(&form) {
        Ok(outcome) => page::success(&outcome),
        Err(err) => page::switch_error(&err),
    }
}
