use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::booking::validation::TimeSlotRequest;
use crate::http_handler::http_response::reservation::ReservationResponse;

/// Submits an already validated slot request. Callers must run
/// `TimeSlotRequest::validate` first; the server still re-checks.
#[derive(Debug)]
pub struct ReserveRequest {
    body: TimeSlotRequest,
}

impl ReserveRequest {
    pub fn new(body: TimeSlotRequest) -> Self { Self { body } }
}

impl JSONBodyHTTPRequestType for ReserveRequest {
    type Body = TimeSlotRequest;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for ReserveRequest {
    type Response = ReservationResponse;
    fn endpoint(&self) -> &'static str { "/reservations" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
