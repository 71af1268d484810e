use strum_macros::Display;

/// Envelope every backend endpoint wraps its payload in. An unsuccessful
/// response carries a user-presentable `message` instead of `content`.
#[derive(Debug, serde::Deserialize)]
pub struct ApiResponse<T> {
    success: bool,
    message: Option<String>,
    content: Option<T>,
}

pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<ApiResponse<Self::ParsedResponseType>, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<ApiResponse<Self::ParsedResponseType>>().await?)
    }
}

/// Marker for payload types that deserialize straight out of the envelope.
pub trait SerdeJSONBodyHTTPResponseType {
    /// Stand-in value for endpoints that legitimately answer with an empty
    /// `content` (e.g. cancellation).
    fn empty_content() -> Option<Self>
    where Self: Sized {
        None
    }
}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        let envelope = Self::parse_json_body(resp).await?;
        if !envelope.success {
            return Err(ResponseError::Unsuccessful(
                envelope.message.unwrap_or_else(|| String::from("unknown reason")),
            ));
        }
        envelope
            .content
            .or_else(T::empty_content)
            .ok_or(ResponseError::MissingContent)
    }
}

pub trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(ResponseError::InternalServer)
        } else if response.status().is_client_error() {
            // The backend keeps the envelope shape even on 4xx.
            let envelope = response.json::<ApiResponse<serde::de::IgnoredAny>>().await?;
            Err(ResponseError::Unsuccessful(
                envelope.message.unwrap_or_else(|| String::from("bad request")),
            ))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer,
    /// `success == false`; the payload is the server's message.
    Unsuccessful(String),
    MissingContent,
    NoConnection,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_redirect() {
            ResponseError::InternalServer
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
