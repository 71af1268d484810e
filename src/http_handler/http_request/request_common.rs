use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Display)]
pub enum RequestError {
    FailedFileAccess(std::io::Error),
    /// The return photo could not be recognized as PNG or JPEG.
    UnsupportedImageFormat,
}

impl std::error::Error for RequestError {}

impl From<std::io::Error> for RequestError {
    fn from(value: std::io::Error) -> Self { RequestError::FailedFileAccess(value) }
}

pub trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }
}

fn base_request<T: HTTPRequestType + ?Sized>(
    client: &HTTPClient,
    request: &T,
) -> reqwest::RequestBuilder {
    let url = format!("{}{}", client.url(), request.endpoint());
    let builder = match request.request_method() {
        HTTPRequestMethod::Get => client.client().get(url),
        HTTPRequestMethod::Post => client.client().post(url),
        HTTPRequestMethod::Put => client.client().put(url),
        HTTPRequestMethod::Delete => client.client().delete(url),
    };
    builder.headers(request.header_params())
}

async fn read<T: HTTPRequestType + ?Sized>(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<<T::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
    let response = response.map_err(|e| HTTPError::Response(ResponseError::from(e)))?;
    T::Response::read_response(response).await.map_err(HTTPError::Response)
}

pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        read::<Self>(base_request(client, self).send().await).await
    }
}

pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;

    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        read::<Self>(base_request(client, self).json(self.body()).send().await).await
    }
}

pub trait MultipartBodyHTTPRequestType: HTTPRequestType {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError>;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let form = self.body().await.map_err(HTTPError::Request)?;
        read::<Self>(base_request(client, self).multipart(form).send().await).await
    }
}
