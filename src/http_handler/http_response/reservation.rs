use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::booking::types::Reservation;

#[derive(Debug, serde::Deserialize)]
pub struct ReservationResponse {
    reservation: Reservation,
}

impl SerdeJSONBodyHTTPResponseType for ReservationResponse {}

impl ReservationResponse {
    pub fn into_reservation(self) -> Reservation { self.reservation }
}

#[derive(Debug, serde::Deserialize)]
pub struct ReservationsResponse {
    reservations: Vec<Reservation>,
}

impl SerdeJSONBodyHTTPResponseType for ReservationsResponse {}

impl ReservationsResponse {
    pub fn into_reservations(self) -> Vec<Reservation> { self.reservations }
}

/// Cancellation answers `success` with a null `content`.
#[derive(Debug, serde::Deserialize)]
pub struct CancelReservationResponse {}

impl SerdeJSONBodyHTTPResponseType for CancelReservationResponse {
    fn empty_content() -> Option<Self> { Some(CancelReservationResponse {}) }
}
