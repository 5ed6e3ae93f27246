//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::User;

/// 새 사용자 생성을 위한 요청 DTO
///
/// `name`, `dob`, `address`는 키가 존재해야 하며 `description`은 선택입니다.
/// 빈 문자열은 "존재함"으로 취급됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required(message = "name은(는) 필수입니다"))]
    pub name: Option<String>,

    #[validate(required(message = "dob은(는) 필수입니다"))]
    pub dob: Option<String>,

    #[validate(required(message = "address은(는) 필수입니다"))]
    pub address: Option<String>,

    pub description: Option<String>,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            dob: request.dob,
            address: request.address,
            description: request.description,
            ..Default::default()
        }
    }
}
