use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::booking::types::Club;
use crate::http_handler::http_response::user::UserResponse;

#[derive(Debug, serde::Serialize)]
pub struct UpdateClubBody {
    pub club: Club,
}

#[derive(Debug)]
pub struct UpdateClubRequest {
    body: UpdateClubBody,
}

impl UpdateClubRequest {
    pub fn new(club: Club) -> Self {
        Self { body: UpdateClubBody { club } }
    }
}

impl JSONBodyHTTPRequestType for UpdateClubRequest {
    type Body = UpdateClubBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for UpdateClubRequest {
    type Response = UserResponse;
    fn endpoint(&self) -> &'static str { "/users/club" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
