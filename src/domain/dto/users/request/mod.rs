//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: `web::Json` 추출기가 JSON 구조와 타입 일치성을 확인
//! 2. **필수 필드 검증**: `validator`의 `required` 규칙으로 필드 존재 여부 확인
//!
//! 어느 단계에서 실패하든 `AppError::ValidationError`(400)로 변환됩니다.
//! 필드 값 자체(빈 문자열, 날짜 형식 등)는 검증하지 않습니다.

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
