//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 컨트롤러 레이어로서 요청을 서비스 호출로, 서비스 결과를 HTTP 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - ID 파싱, 서버 부여 필드             ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB 연산                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 핸들러는 `web::Data<dyn UserService>`로 서비스를 받습니다.
//! 운영 환경에서는 `StoreUserService`가, 테스트에서는 대역 구현이 등록됩니다.
//!
//! ```rust,ignore
//! let service: Arc<dyn UserService> = Arc::new(StoreUserService::new(repo));
//!
//! App::new()
//!     .app_data(web::Data::from(service))
//!     .configure(configure_all_routes)
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트
//!   - 사용자 조회 (`GET /apis/users/{id}`)
//!   - 사용자 생성 (`POST /apis/users`)
//!   - 사용자 부분 수정 (`PUT /apis/users/{id}`)
//!   - 사용자 삭제 (`DELETE /apis/users/{id}`)

pub mod users;
