//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 CRUD 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 서비스 계층의 실패를
//! 일관된 HTTP 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱 / 필수 필드 누락 |
//! | `BadRequest` | 400 Bad Request | 수정 대상 사용자 없음 |
//! | `NotFound` | 404 Not Found | 문서 없음 (GET 핸들러는 204로 별도 처리) |
//! | `InvalidIdentifier` | 500 Internal Server Error | ObjectId 형식 오류 |
//! | `StoreError` | 500 Internal Server Error | MongoDB 연산 실패 |
//! | `ConfigError` | 500 Internal Server Error | 기동 시 설정 오류 |
//! | `ServerError` | 500 Internal Server Error | 리스너 바인딩 실패 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! fn parse_id(id: &str) -> AppResult<ObjectId> {
//!     ObjectId::parse_str(id)
//!         .map_err(|e| AppError::InvalidIdentifier(format!("invalid user ID: {}", e)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스와 컨트롤러 사이에서 오가는 모든 실패를 표현합니다.
/// 서비스 계층은 로그를 남기지 않고 이 값을 그대로 반환하며,
/// 상태 코드 결정은 컨트롤러와 [`actix_web::ResponseError`] 구현이 담당합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 호출자가 전달한 ID가 MongoDB ObjectId 형식이 아님
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// 해당 ID의 문서가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 그 밖의 모든 저장소 실패 (타임아웃, 디코딩 오류, 연결 끊김 등)
    #[error("Store error: {0}")]
    StoreError(String),

    /// 요청 본문 디코딩 또는 필수 필드 검증 실패
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 형식은 올바르지만 처리할 수 없는 요청
    #[error("{0}")]
    BadRequest(String),

    /// 기동 시 설정 오류 (잘못된 연결 문자열 등)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// HTTP 리스너 바인딩 또는 실행 실패
    #[error("Server error: {0}")]
    ServerError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `{"error": "..."}` 형식의 JSON 본문을 가집니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let user = repo.find_by_id(object_id).await
///     .store_context("failed to find User")?;
/// ```
pub trait ErrorContext<T> {
    /// 저장소 실패를 컨텍스트 메시지와 함께 `StoreError`로 변환합니다.
    fn store_context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_store_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn store_context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StoreError(format!("{}: {}", msg, e)))
    }

    fn with_store_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::StoreError(format!("{}: {}", f(), e)))
    }
}
