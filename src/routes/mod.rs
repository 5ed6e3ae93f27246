//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 애플리케이션에 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /apis/users/{id}` - 사용자 조회
//! - `POST /apis/users` - 사용자 생성
//! - `PUT /apis/users/{id}` - 사용자 부분 수정
//! - `DELETE /apis/users/{id}` - 사용자 삭제
//!
//! 핸들러는 `web::Data<dyn UserService>`를 요구하므로, 호출 측에서
//! 서비스를 `app_data`로 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::from(service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 본문은 `Content-Type` 헤더와 무관하게 JSON으로 해석합니다.
/// JSON 본문 추출 실패는 [`handlers::users::json_error_handler`]를 거쳐
/// `{"error": "..."}` 형식의 400 응답이 됩니다.
///
/// # Examples
///
/// ```bash
/// # 생성
/// curl -X POST http://localhost:8080/apis/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","dob":"1/2/3","address":"1 Singapore Road"}'
///
/// # 부분 수정
/// curl -X PUT http://localhost:8080/apis/users/507f1f77bcf86cd799439011 \
///   -H "Content-Type: application/json" \
///   -d '{"description":"moved"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/apis/users")
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(handlers::users::json_error_handler),
            )
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소 연결 여부와 무관하게 프로세스가 요청을 처리할 수 있으면 200을 반환합니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
