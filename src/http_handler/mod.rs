use self::http_request::request_common::RequestError;
use self::http_response::response_common::ResponseError;
use strum_macros::Display;

pub mod http_client;
pub mod http_request;
pub mod http_response;

#[derive(Debug, Display)]
pub enum HTTPError {
    Request(RequestError),
    Response(ResponseError),
}

impl std::error::Error for HTTPError {}
