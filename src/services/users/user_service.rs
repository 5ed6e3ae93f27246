//! # 사용자 관리 서비스 구현
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        UserController        │  HTTP ↔ 서비스 호출
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │   UserService (trait)        │  get / create / update / delete
//! │   └─ StoreUserService        │  ID 파싱, createdAt 부여
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │   UserRepository (trait)     │  find_by_id / insert / set_fields / delete
//! │   └─ MongoUserRepository     │
//! └──────────────────────────────┘
//! ```
//!
//! ## 에러 처리 전략
//!
//! 서비스는 로그를 남기지 않고 모든 실패를 값으로 반환합니다. 재시도는 없습니다.
//!
//! - **InvalidIdentifier**: ObjectId로 파싱할 수 없는 ID
//! - **NotFound**: `get` 대상 문서 없음
//! - **StoreError**: 그 밖의 모든 저장소 실패
//!
//! `update`의 "매칭된 문서 없음"은 에러가 아니라 `Ok(None)`으로 구분됩니다.
//!
//! ## 상한 시간
//!
//! 클라이언트가 연결을 끊어도 actix는 핸들러를 끝까지 실행하므로, 저장소 연산은
//! 요청마다 상한 시간으로 묶입니다. 상한을 넘긴 연산 future는 drop되고
//! `RepositoryError::Timeout`이 `StoreError`로 보고됩니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use actix_web::rt::time::timeout;
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;

use crate::config::DatabaseConfig;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::{RepositoryError, UserRepository};

/// 사용자 리소스에 대한 서비스 계약
///
/// 컨트롤러는 이 trait에만 의존합니다.
#[async_trait]
pub trait UserService: Send + Sync {
    /// ID로 사용자를 조회합니다.
    ///
    /// * `Err(AppError::InvalidIdentifier)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::NotFound)` - 문서 없음
    /// * `Err(AppError::StoreError)` - 그 밖의 조회 실패
    async fn get(&self, id: &str) -> AppResult<User>;

    /// 사용자를 생성합니다.
    ///
    /// 성공 시 `user.id`와 `user.created_at`이 채워집니다.
    async fn create(&self, user: &mut User) -> AppResult<()>;

    /// 값이 있는 필드만 부분 수정합니다.
    ///
    /// * `Ok(Some(user))` - 매칭됨. 제출된 부분 사용자를 그대로 반환 (재조회 없음)
    /// * `Ok(None)` - 매칭된 문서 없음
    async fn update(&self, id: &str, user: User) -> AppResult<Option<User>>;

    /// 사용자를 삭제합니다. 삭제된 문서가 없어도 성공입니다.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// 리포지토리 기반 [`UserService`] 구현체
///
/// 요청 간 공유 상태는 리포지토리(커넥션 풀)뿐입니다.
pub struct StoreUserService {
    user_repo: Arc<dyn UserRepository>,
    request_timeout: Duration,
}

impl StoreUserService {
    /// `DATABASE_REQUEST_TIMEOUT_SECS` 상한을 사용하는 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self::with_timeout(user_repo, DatabaseConfig::request_timeout())
    }

    pub fn with_timeout(user_repo: Arc<dyn UserRepository>, request_timeout: Duration) -> Self {
        Self {
            user_repo,
            request_timeout,
        }
    }

    /// 저장소 연산을 상한 시간 안에 끝내거나 버립니다.
    async fn bounded<T>(
        &self,
        op: impl Future<Output = Result<T, RepositoryError>>,
    ) -> Result<T, RepositoryError> {
        timeout(self.request_timeout, op)
            .await
            .map_err(|_| RepositoryError::Timeout(self.request_timeout))?
    }
}

#[async_trait]
impl UserService for StoreUserService {
    async fn get(&self, id: &str) -> AppResult<User> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|e| AppError::InvalidIdentifier(format!("invalid user ID: {}", e)))?;

        self.bounded(self.user_repo.find_by_id(object_id))
            .await
            .store_context("failed to find User")?
            .ok_or_else(|| AppError::NotFound(format!("user with id `{}`", id)))
    }

    async fn create(&self, user: &mut User) -> AppResult<()> {
        user.mark_created(Utc::now());

        let inserted_id = self
            .bounded(self.user_repo.insert(user))
            .await
            .store_context("failed to insert User")?;

        user.id = Some(inserted_id);
        Ok(())
    }

    async fn update(&self, id: &str, user: User) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|e| AppError::InvalidIdentifier(format!("failed to parse user ID: {}", e)))?;

        // 빈 $set은 보내지 않고 존재 여부만 확인
        let matched = if user.has_changes() {
            self.bounded(self.user_repo.set_fields(object_id, &user))
                .await
                .with_store_context(|| format!("failed to modify user with id {}", id))?
        } else {
            self.bounded(self.user_repo.find_by_id(object_id))
                .await
                .with_store_context(|| format!("failed to modify user with id {}", id))?
                .map_or(0, |_| 1)
        };

        if matched < 1 {
            return Ok(None);
        }

        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::InvalidIdentifier("invalid user ID".to_string()))?;

        self.bounded(self.user_repo.delete(object_id))
            .await
            .with_store_context(|| format!("failed to delete user with id {}", id))?;

        Ok(())
    }
}
