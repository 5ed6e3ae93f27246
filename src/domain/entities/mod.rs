//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **선택적 필드**: 없는 필드는 문서에서 생략

pub mod users;
