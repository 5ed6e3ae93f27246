//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/apis/users/{id}` | 200 + User | 204 (없음), 500 |
//! | `POST` | `/apis/users` | 201 + User | 400, 500 |
//! | `PUT` | `/apis/users/{id}` | 202 + 부분 User | 400 (본문 오류, 대상 없음), 500 |
//! | `DELETE` | `/apis/users/{id}` | 200 (본문 없음) | 500 |
//!
//! 상태 코드 결정은 이 모듈과 [`AppError`]의 `ResponseError` 구현만 담당합니다.
//! 각 저장소 연산의 상한 시간은 서비스 계층이 보장합니다
//! ([`DatabaseConfig::request_timeout`](crate::config::DatabaseConfig::request_timeout)).
//! 상한을 넘긴 연산은 버려지고 500 응답이 됩니다.

use actix_web::{
    HttpRequest, HttpResponse, delete, error::JsonPayloadError, get, http::Method, post, put, web,
};
use log::{error, info, warn};
use validator::Validate;

use crate::domain::dto::users::{
    request::{CreateUserRequest, UpdateUserRequest},
    response::UserResponse,
};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::services::users::UserService;

const INVALID_CREATE_REQUEST: &str = "invalid new user request";
const INVALID_UPDATE_REQUEST: &str = "invalid update user request";

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /apis/users/{user_id}`
///
/// # 응답
///
/// - 200 OK - 사용자 JSON
/// - 204 No Content - 해당 ID의 문서 없음 (본문 없음)
/// - 500 Internal Server Error - 잘못된 ID 형식, 저장소 오류
///
/// ```bash
/// curl http://localhost:8080/apis/users/507f1f77bcf86cd799439011
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service.get(&user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(UserResponse::from(user))),
        Err(AppError::NotFound(_)) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => {
            error!("사용자 조회 실패 ({}): {}", user_id, e);
            Err(e)
        }
    }
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /apis/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "dob": "1/2/3",
///   "address": "1 Singapore Road",
///   "description": "test create"
/// }
/// ```
///
/// `name`, `dob`, `address`는 필수, `description`은 선택입니다.
///
/// # 응답
///
/// - 201 Created - `id`, `createdAt`이 채워진 사용자 JSON
/// - 400 Bad Request - 본문 파싱 실패 또는 필수 필드 누락
/// - 500 Internal Server Error - 저장소 오류
#[post("")]
pub async fn create_user(
    service: web::Data<dyn UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| {
        warn!("{}: {}", INVALID_CREATE_REQUEST, e);
        AppError::ValidationError(INVALID_CREATE_REQUEST.to_string())
    })?;

    let mut user = User::from(payload.into_inner());

    if let Err(e) = service.create(&mut user).await {
        error!("사용자 생성 실패: {}", e);
        return Err(e);
    }

    info!("사용자 생성: {}", user.id_string().unwrap_or_default());
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 부분 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /apis/users/{user_id}`
///
/// 본문의 모든 필드는 선택이며, 존재하는 필드만 변경됩니다.
///
/// # 응답
///
/// - 202 Accepted - 제출한 부분 사용자 JSON (병합된 전체 문서가 아님)
/// - 400 Bad Request - 본문 파싱 실패, 또는 해당 ID의 사용자 없음
/// - 500 Internal Server Error - 잘못된 ID 형식, 저장소 오류
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let partial = User::from(payload.into_inner());

    let updated = service.update(&user_id, partial).await.map_err(|e| {
        error!("사용자 수정 실패 ({}): {}", user_id, e);
        e
    })?;

    match updated {
        Some(user) => Ok(HttpResponse::Accepted().json(UserResponse::from(user))),
        None => Err(AppError::BadRequest(format!("user with id `{}` not found", user_id))),
    }
}

/// 사용자 삭제 핸들러
///
/// # 엔드포인트
///
/// `DELETE /apis/users/{user_id}`
///
/// 존재하지 않는 사용자 삭제도 성공으로 처리합니다.
///
/// # 응답
///
/// - 200 OK - 본문 없음
/// - 500 Internal Server Error - 잘못된 ID 형식, 저장소 오류
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<dyn UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = service.delete(&user_id).await {
        error!("사용자 삭제 실패 ({}): {}", user_id, e);
        return Err(e);
    }

    Ok(HttpResponse::Ok().finish())
}

/// JSON 본문 추출 실패를 400 응답으로 변환합니다.
///
/// 생성(POST)과 수정(PUT) 요청에 따라 메시지를 구분합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = if req.method() == Method::POST {
        INVALID_CREATE_REQUEST
    } else {
        INVALID_UPDATE_REQUEST
    };

    warn!("{}: {}", message, err);
    AppError::ValidationError(message.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use chrono::Utc;
    use mongodb::bson::oid::ObjectId;
    use serde_json::{Value, json};

    use crate::errors::AppResult;
    use crate::routes::configure_all_routes;

    /// 호출마다 지정한 결과를 돌려주는 서비스 대역
    struct MockUserService {
        mock_get: Box<dyn Fn(&str) -> AppResult<User> + Send + Sync>,
        mock_create: Box<dyn Fn(&mut User) -> AppResult<()> + Send + Sync>,
        mock_update: Box<dyn Fn(&str, User) -> AppResult<Option<User>> + Send + Sync>,
        mock_delete: Box<dyn Fn(&str) -> AppResult<()> + Send + Sync>,
    }

    impl MockUserService {
        fn new() -> Self {
            Self {
                mock_get: Box::new(|_: &str| Err(AppError::NotFound("user".to_string()))),
                mock_create: Box::new(|_: &mut User| Ok(())),
                mock_update: Box::new(|_: &str, _: User| Ok(None)),
                mock_delete: Box::new(|_: &str| Ok(())),
            }
        }
    }

    #[async_trait::async_trait]
    impl UserService for MockUserService {
        async fn get(&self, id: &str) -> AppResult<User> {
            (self.mock_get)(id)
        }

        async fn create(&self, user: &mut User) -> AppResult<()> {
            (self.mock_create)(user)
        }

        async fn update(&self, id: &str, user: User) -> AppResult<Option<User>> {
            (self.mock_update)(id, user)
        }

        async fn delete(&self, id: &str) -> AppResult<()> {
            (self.mock_delete)(id)
        }
    }

    async fn send(service: MockUserService, request: test::TestRequest) -> ServiceResponse {
        let service: Arc<dyn UserService> = Arc::new(service);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .configure(configure_all_routes),
        )
        .await;

        test::call_service(&app, request.to_request()).await
    }

    fn create_payload() -> Value {
        json!({
            "name": "John Doe",
            "dob": "1/2/3",
            "address": "1 Singapore Road",
            "description": "test create"
        })
    }

    fn update_payload() -> Value {
        json!({
            "name": "John Doe",
            "dob": "1/1/2022",
            "address": "1 Singapore Road",
            "description": "test update user"
        })
    }

    #[actix_web::test]
    async fn test_get_user() {
        let object_id = ObjectId::new();
        let forwarded = Arc::new(Mutex::new(None));
        let seen = forwarded.clone();
        let mut svc = MockUserService::new();
        svc.mock_get = Box::new(move |id: &str| {
            *seen.lock().unwrap() = Some(id.to_string());
            Ok(User {
                id: Some(object_id),
                name: Some("John Doe".to_string()),
                dob: Some("1/1/2022".to_string()),
                address: Some("1 Singapore Road".to_string()),
                description: Some("test user".to_string()),
                created_at: Some("now".to_string()),
            })
        });

        let request = test::TestRequest::get()
            .uri(&format!("/apis/users/{}", object_id.to_hex()));
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(forwarded.lock().unwrap().clone(), Some(object_id.to_hex()));
        let got: UserResponse = test::read_body_json(resp).await;
        assert_eq!(got.id, Some(object_id.to_hex()));
        assert_eq!(got.name.as_deref(), Some("John Doe"));
        assert_eq!(got.dob.as_deref(), Some("1/1/2022"));
        assert_eq!(got.address.as_deref(), Some("1 Singapore Road"));
        assert_eq!(got.description.as_deref(), Some("test user"));
        assert_eq!(got.created_at.as_deref(), Some("now"));
    }

    #[actix_web::test]
    async fn test_get_user_not_found() {
        let request = test::TestRequest::get().uri("/apis/users/1");
        let resp = send(MockUserService::new(), request).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_get_user_store_error() {
        let mut svc = MockUserService::new();
        svc.mock_get = Box::new(|_: &str| Err(AppError::StoreError("oops".to_string())));

        let resp = send(svc, test::TestRequest::get().uri("/apis/users/1")).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("oops"));
    }

    #[actix_web::test]
    async fn test_create_user() {
        let mut svc = MockUserService::new();
        svc.mock_create = Box::new(|user: &mut User| {
            user.id = Some(ObjectId::new());
            user.mark_created(Utc::now());
            Ok(())
        });

        let request = test::TestRequest::post()
            .uri("/apis/users")
            .set_json(create_payload());
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let got: UserResponse = test::read_body_json(resp).await;
        assert_eq!(got.name.as_deref(), Some("John Doe"));
        assert_eq!(got.dob.as_deref(), Some("1/2/3"));
        assert_eq!(got.address.as_deref(), Some("1 Singapore Road"));
        assert_eq!(got.description.as_deref(), Some("test create"));
        assert!(!got.id.unwrap_or_default().is_empty());
        assert!(!got.created_at.unwrap_or_default().is_empty());
    }

    #[actix_web::test]
    async fn test_create_user_without_content_type() {
        let request = test::TestRequest::post()
            .uri("/apis/users")
            .set_payload(create_payload().to_string());
        let resp = send(MockUserService::new(), request).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let got: UserResponse = test::read_body_json(resp).await;
        assert_eq!(got.name.as_deref(), Some("John Doe"));
        assert_eq!(got.description.as_deref(), Some("test create"));
    }

    #[actix_web::test]
    async fn test_create_user_err() {
        let mut svc = MockUserService::new();
        svc.mock_create =
            Box::new(|_: &mut User| Err(AppError::StoreError("oops".to_string())));

        let request = test::TestRequest::post()
            .uri("/apis/users")
            .set_json(create_payload());
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_create_user_missing_required_field() {
        let mut svc = MockUserService::new();
        svc.mock_create = Box::new(|_: &mut User| -> AppResult<()> {
            panic!("create must not be called")
        });

        let request = test::TestRequest::post()
            .uri("/apis/users")
            .set_json(json!({ "name": "John Doe", "dob": "1/2/3" }));
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains(INVALID_CREATE_REQUEST));
    }

    #[actix_web::test]
    async fn test_create_user_malformed_body() {
        let request = test::TestRequest::post()
            .uri("/apis/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ");
        let resp = send(MockUserService::new(), request).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains(INVALID_CREATE_REQUEST));
    }

    #[actix_web::test]
    async fn test_update_user() {
        let user_id = ObjectId::new().to_hex();
        let forwarded = Arc::new(Mutex::new(None));
        let seen = forwarded.clone();
        let mut svc = MockUserService::new();
        svc.mock_update = Box::new(move |id: &str, user: User| {
            *seen.lock().unwrap() = Some(id.to_string());
            Ok(Some(user))
        });

        let request = test::TestRequest::put()
            .uri(&format!("/apis/users/{}", user_id))
            .set_json(update_payload());
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(forwarded.lock().unwrap().clone(), Some(user_id));
        let got: UserResponse = test::read_body_json(resp).await;
        assert_eq!(got.name.as_deref(), Some("John Doe"));
        assert_eq!(got.dob.as_deref(), Some("1/1/2022"));
        assert_eq!(got.address.as_deref(), Some("1 Singapore Road"));
        assert_eq!(got.description.as_deref(), Some("test update user"));
    }

    #[actix_web::test]
    async fn test_update_user_echoes_only_submitted_fields() {
        let mut svc = MockUserService::new();
        svc.mock_update = Box::new(|_: &str, user: User| Ok(Some(user)));

        let request = test::TestRequest::put()
            .uri(&format!("/apis/users/{}", ObjectId::new().to_hex()))
            .set_json(json!({ "description": "only this" }));
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "description": "only this" }));
    }

    #[actix_web::test]
    async fn test_update_user_not_found() {
        let request = test::TestRequest::put()
            .uri("/apis/users/1")
            .set_json(update_payload());
        let resp = send(MockUserService::new(), request).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("`1`"));
    }

    #[actix_web::test]
    async fn test_update_user_err() {
        let mut svc = MockUserService::new();
        svc.mock_update =
            Box::new(|_: &str, _: User| Err(AppError::StoreError("oops".to_string())));

        let request = test::TestRequest::put()
            .uri("/apis/users/1")
            .set_json(update_payload());
        let resp = send(svc, request).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_update_user_malformed_body() {
        let request = test::TestRequest::put()
            .uri("/apis/users/1")
            .insert_header(("content-type", "application/json"))
            .set_payload("[1, 2");
        let resp = send(MockUserService::new(), request).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains(INVALID_UPDATE_REQUEST));
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let forwarded = Arc::new(Mutex::new(None));
        let seen = forwarded.clone();
        let mut svc = MockUserService::new();
        svc.mock_delete = Box::new(move |id: &str| {
            *seen.lock().unwrap() = Some(id.to_string());
            Ok(())
        });

        let resp = send(svc, test::TestRequest::delete().uri("/apis/users/42")).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(forwarded.lock().unwrap().clone(), Some("42".to_string()));
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_user_err() {
        let mut svc = MockUserService::new();
        svc.mock_delete = Box::new(|_: &str| Err(AppError::StoreError("oops".to_string())));

        let resp = send(svc, test::TestRequest::delete().uri("/apis/users/1")).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_malformed_id_maps_to_500() {
        let mut svc = MockUserService::new();
        svc.mock_delete =
            Box::new(|_: &str| Err(AppError::InvalidIdentifier("invalid user ID".to_string())));

        let resp = send(svc, test::TestRequest::delete().uri("/apis/users/xyz")).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
