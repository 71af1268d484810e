use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::reservation::ReservationsResponse;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct WeeklyReservationsRequest {
    endpoint: String,
}

impl WeeklyReservationsRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            endpoint: format!(
                "/reservations/weekly?startDate={}&endDate={}",
                start_date.format("%Y-%m-%d"),
                end_date.format("%Y-%m-%d"),
            ),
        }
    }
}

impl NoBodyHTTPRequestType for WeeklyReservationsRequest {}

impl HTTPRequestType for WeeklyReservationsRequest {
    type Response = ReservationsResponse;
    fn endpoint(&self) -> &str { self.endpoint.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
