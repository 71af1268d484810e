pub mod cancel_reservation_delete;
pub mod daily_reservations_get;
pub mod me_get;
pub mod my_reservations_get;
pub mod request_common;
pub mod reserve_post;
pub mod return_picture_post;
pub mod sign_up_post;
pub mod update_club_put;
pub mod users_get;
pub mod weekly_reservations_get;
