//! 애플리케이션 에러 모듈
//!
//! [`errors::AppError`]와 결과 타입 별칭, 에러 컨텍스트 확장 trait을 제공합니다.

pub mod errors;

pub use errors::*;
