use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::reservation::CancelReservationResponse;

#[derive(Debug)]
pub struct CancelReservationRequest {
    endpoint: String,
}

impl CancelReservationRequest {
    pub fn new(reservation_id: &str) -> Self {
        Self { endpoint: format!("/reservations/{reservation_id}") }
    }
}

impl NoBodyHTTPRequestType for CancelReservationRequest {}

impl HTTPRequestType for CancelReservationRequest {
    type Response = CancelReservationResponse;
    fn endpoint(&self) -> &str { self.endpoint.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
