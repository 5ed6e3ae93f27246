//! 사용자 부분 수정 요청 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 부분 수정 요청 DTO
///
/// 모든 필드가 선택이며, 존재하는 필드만 `$set`으로 반영됩니다.
/// `null`은 필드가 없는 것과 동일하게 취급됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateUserRequest> for User {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            dob: request.dob,
            address: request.address,
            description: request.description,
            ..Default::default()
        }
    }
}
