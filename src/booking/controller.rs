use super::types::Reservation;
use super::validation::{FieldError, TimeSlotRequest};
use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    cancel_reservation_delete::CancelReservationRequest,
    daily_reservations_get::DailyReservationsRequest,
    my_reservations_get::MyReservationsRequest,
    request_common::{JSONBodyHTTPRequestType, MultipartBodyHTTPRequestType, NoBodyHTTPRequestType},
    reserve_post::ReserveRequest,
    return_picture_post::ReturnPictureRequest,
    weekly_reservations_get::WeeklyReservationsRequest,
};
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Debug)]
pub enum BookingError {
    /// The request never left the client; every offending field is listed.
    Invalid(Vec<FieldError>),
    /// Cancellation is only legal while the reservation is still pending.
    NotCancellable,
    /// The same logical action is already in flight.
    Busy,
    Http(HTTPError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Invalid(errors) => {
                write!(f, "invalid request: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            BookingError::NotCancellable => write!(f, "reservation is no longer pending"),
            BookingError::Busy => write!(f, "action already in flight"),
            BookingError::Http(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<HTTPError> for BookingError {
    fn from(value: HTTPError) -> Self { BookingError::Http(value) }
}

/// Coarse per-action busy flag. The UI disables the triggering control while
/// the guard is held; a second trigger is rejected, never queued.
#[derive(Debug, Default)]
struct InFlight(AtomicBool);

impl InFlight {
    fn acquire(&self) -> Result<InFlightGuard<'_>, BookingError> {
        if self.0.swap(true, Ordering::SeqCst) {
            Err(BookingError::Busy)
        } else {
            Ok(InFlightGuard(&self.0))
        }
    }

    fn is_set(&self) -> bool { self.0.load(Ordering::SeqCst) }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) { self.0.store(false, Ordering::SeqCst); }
}

/// Owns the in-memory reservation list and every remote mutation on it.
/// The list only changes after the corresponding call succeeded; a failed
/// call leaves it exactly as it was.
pub struct ReservationController {
    client: Arc<HTTPClient>,
    reservations: RwLock<Vec<Reservation>>,
    fetch: InFlight,
    reserve: InFlight,
    cancel: InFlight,
    return_upload: InFlight,
}

impl ReservationController {
    pub fn new(client: Arc<HTTPClient>) -> Self {
        Self {
            client,
            reservations: RwLock::new(Vec::new()),
            fetch: InFlight::default(),
            reserve: InFlight::default(),
            cancel: InFlight::default(),
            return_upload: InFlight::default(),
        }
    }

    /// True while a list fetch is running; the timetable shows placeholder
    /// blocks instead of real data.
    pub fn is_loading(&self) -> bool { self.fetch.is_set() }

    pub async fn snapshot(&self) -> Vec<Reservation> {
        self.reservations.read().await.clone()
    }

    pub async fn fetch_my(&self) -> Result<(), BookingError> {
        let _guard = self.fetch.acquire()?;
        let response = MyReservationsRequest {}.send_request(&self.client).await?;
        self.replace_all(response.into_reservations()).await;
        Ok(())
    }

    pub async fn fetch_daily(&self, date: NaiveDate) -> Result<(), BookingError> {
        let _guard = self.fetch.acquire()?;
        let response = DailyReservationsRequest::new(date).send_request(&self.client).await?;
        self.replace_all(response.into_reservations()).await;
        Ok(())
    }

    pub async fn fetch_weekly(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), BookingError> {
        let _guard = self.fetch.acquire()?;
        let response =
            WeeklyReservationsRequest::new(start_date, end_date).send_request(&self.client).await?;
        self.replace_all(response.into_reservations()).await;
        Ok(())
    }

    /// Validates the slot request and submits it. The created reservation is
    /// appended to the local list on success.
    pub async fn reserve(&self, request: TimeSlotRequest) -> Result<(), BookingError> {
        request.validate().map_err(BookingError::Invalid)?;
        let _guard = self.reserve.acquire()?;
        let response = ReserveRequest::new(request).send_request(&self.client).await?;
        let reservation = response.into_reservation();
        crate::event!("Reserved {} on {}", reservation.space().label(), reservation.date());
        self.reservations.write().await.push(reservation);
        Ok(())
    }

    pub async fn cancel(&self, reservation_id: &str) -> Result<(), BookingError> {
        if let Some(known) =
            self.reservations.read().await.iter().find(|r| r.id() == reservation_id)
        {
            if !known.is_pending() {
                return Err(BookingError::NotCancellable);
            }
        }
        let _guard = self.cancel.acquire()?;
        CancelReservationRequest::new(reservation_id).send_request(&self.client).await?;
        crate::event!("Cancelled reservation {reservation_id}");
        self.reservations.write().await.retain(|r| r.id() != reservation_id);
        Ok(())
    }

    /// Uploads the return photo and swaps in the updated reservation the
    /// server answers with (status RETURNED, `returnedAt` set).
    pub async fn confirm_return<P: AsRef<Path>>(
        &self,
        reservation_id: &str,
        picture_path: P,
    ) -> Result<(), BookingError> {
        let _guard = self.return_upload.acquire()?;
        let request = ReturnPictureRequest::new(reservation_id, picture_path)
            .map_err(|e| BookingError::Http(HTTPError::Request(e)))?;
        let response = request.send_request(&self.client).await?;
        let updated = response.into_reservation();
        crate::event!("Returned reservation {reservation_id}");
        let mut reservations = self.reservations.write().await;
        match reservations.iter_mut().find(|r| r.id() == reservation_id) {
            Some(slot) => *slot = updated,
            None => reservations.push(updated),
        }
        Ok(())
    }

    async fn replace_all(&self, fresh: Vec<Reservation>) {
        crate::event!("Fetched {} reservations", fresh.len());
        *self.reservations.write().await = fresh;
    }
}
