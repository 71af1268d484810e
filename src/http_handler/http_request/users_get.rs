use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::user::UsersResponse;

/// Free-text member lookup used by the participant picker.
#[derive(Debug)]
pub struct UsersRequest {
    endpoint: String,
}

impl UsersRequest {
    pub fn new(query: &str) -> Self {
        Self { endpoint: format!("/users?query={query}") }
    }
}

impl NoBodyHTTPRequestType for UsersRequest {}

impl HTTPRequestType for UsersRequest {
    type Response = UsersResponse;
    fn endpoint(&self) -> &str { self.endpoint.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
