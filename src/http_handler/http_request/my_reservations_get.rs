use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::reservation::ReservationsResponse;

#[derive(Debug)]
pub struct MyReservationsRequest {}

impl NoBodyHTTPRequestType for MyReservationsRequest {}

impl HTTPRequestType for MyReservationsRequest {
    type Response = ReservationsResponse;
    fn endpoint(&self) -> &'static str { "/reservations/me" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
