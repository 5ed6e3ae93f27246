//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체들입니다.
//! 엔티티와 달리 JSON 필드 이름(`id`, `createdAt`)을 기준으로 정의됩니다.
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/   - 생성/수정 요청 본문
//!     └── response/  - 사용자 응답 본문
//! ```

pub mod users;

pub use users::*;
