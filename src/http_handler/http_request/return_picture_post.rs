use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, MultipartBodyHTTPRequestType, RequestError,
};
use crate::http_handler::http_response::reservation::ReservationResponse;
use std::io;
use std::path::Path;

/// Uploads the photo proving a manual return. The file must exist and sniff
/// as PNG or JPEG before any bytes go over the wire.
#[derive(Debug)]
pub struct ReturnPictureRequest {
    endpoint: String,
    picture_path: String,
}

impl ReturnPictureRequest {
    pub fn new<P: AsRef<Path>>(reservation_id: &str, picture_path: P) -> Result<Self, RequestError> {
        let path = picture_path.as_ref();
        if !path.is_file() {
            return Err(RequestError::FailedFileAccess(io::Error::new(
                io::ErrorKind::NotFound,
                "Picture path is not a readable file",
            )));
        }
        let format = image::ImageReader::open(path)?.with_guessed_format()?.format();
        match format {
            Some(image::ImageFormat::Png | image::ImageFormat::Jpeg) => Ok(Self {
                endpoint: format!("/reservations/{reservation_id}/return"),
                picture_path: path.to_string_lossy().to_string(),
            }),
            _ => Err(RequestError::UnsupportedImageFormat),
        }
    }
}

impl MultipartBodyHTTPRequestType for ReturnPictureRequest {
    async fn body(&self) -> Result<reqwest::multipart::Form, RequestError> {
        let file_part = reqwest::multipart::Part::file(&self.picture_path).await?;
        Ok(reqwest::multipart::Form::new().part("file", file_part))
    }
}

impl HTTPRequestType for ReturnPictureRequest {
    type Response = ReservationResponse;
    fn endpoint(&self) -> &str { self.endpoint.as_str() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
