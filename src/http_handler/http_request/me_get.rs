use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::user::UserResponse;

#[derive(Debug)]
pub struct MeRequest {}

impl NoBodyHTTPRequestType for MeRequest {}

impl HTTPRequestType for MeRequest {
    type Response = UserResponse;
    fn endpoint(&self) -> &'static str { "/users/me" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
