//! 사용자 DTO 모듈
//!
//! - [`request::CreateUserRequest`] - `POST /users` 본문 (name, dob, address 필수)
//! - [`request::UpdateUserRequest`] - `PUT /users/{id}` 본문 (모든 필드 선택)
//! - [`response::UserResponse`] - 사용자 JSON 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
