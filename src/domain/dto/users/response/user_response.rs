use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 값이 없는 필드는 JSON 키 자체가 생략됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// ObjectId의 16진수 문자열
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            dob,
            address,
            description,
            created_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()),
            name,
            dob,
            address,
            description,
            created_at,
        }
    }
}
