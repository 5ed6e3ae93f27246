//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 사용자 문서
//! └── DTOs      - HTTP 요청/응답 본문
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 필드 존재 여부 (Presence Tracking)
//!
//! 모든 사용자 필드는 `Option<T>`로 표현되며 `None`은 "필드 없음"을 뜻합니다.
//! 저장(BSON)과 전송(JSON) 양쪽 모두 `None` 필드는 키 자체를 생략하고
//! `null`이나 빈 문자열로 기록하지 않습니다. 부분 수정 요청은 변경할 필드만 담아
//! `$set`으로 전달됩니다.

pub mod entities;
pub mod dto;
