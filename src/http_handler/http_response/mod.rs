pub mod reservation;
pub mod response_common;
pub mod user;
