use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::booking::types::Club;
use crate::http_handler::http_response::user::UserResponse;

#[derive(Debug, serde::Serialize)]
pub struct SignUpBody {
    pub name: String,
    pub club: Club,
}

#[derive(Debug)]
pub struct SignUpRequest {
    body: SignUpBody,
}

impl SignUpRequest {
    pub fn new(name: &str, club: Club) -> Self {
        Self { body: SignUpBody { name: name.to_owned(), club } }
    }
}

impl JSONBodyHTTPRequestType for SignUpRequest {
    type Body = SignUpBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for SignUpRequest {
    type Response = UserResponse;
    fn endpoint(&self) -> &'static str { "/users/sign-up" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
