use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::booking::types::UserDto;

#[derive(Debug, serde::Deserialize)]
pub struct UserResponse {
    user: UserDto,
}

impl SerdeJSONBodyHTTPResponseType for UserResponse {}

impl UserResponse {
    pub fn into_user(self) -> UserDto { self.user }
}

#[derive(Debug, serde::Deserialize)]
pub struct UsersResponse {
    users: Vec<UserDto>,
}

impl SerdeJSONBodyHTTPResponseType for UsersResponse {}

impl UsersResponse {
    pub fn into_users(self) -> Vec<UserDto> { self.users }
}
