use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::reservation::ReservationsResponse;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct DailyReservationsRequest {
    endpoint: String,
}

impl DailyReservationsRequest {
    pub fn new(date: NaiveDate) -> Self {
        Self { endpoint: format!("/reservations/daily?date={}", date.format("%Y-%m-%d")) }
    }
}

impl NoBodyHTTPRequestType for DailyReservationsRequest {}

impl HTTPRequestType for DailyReservationsRequest {
    type Response = ReservationsResponse;
    fn endpoint(&self) -> &str { self.endpoint.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
