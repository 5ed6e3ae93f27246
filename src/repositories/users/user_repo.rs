//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 단건 CRUD 연산을 담당합니다.
//! 식별자는 이미 파싱된 `ObjectId`로 받으며, 문자열 ID 검증은 서비스 계층의 몫입니다.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};
use thiserror::Error;

use crate::db::Database;
use crate::domain::entities::users::User;

/// 리포지토리 연산 실패
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 드라이버가 반환한 실패 (연결, 타임아웃, 디코딩 등)
    #[error("user repository query failed: {0}")]
    Query(String),

    /// 엔티티를 BSON 문서로 변환하지 못함
    #[error("user document encoding failed: {0}")]
    Encoding(String),

    /// 삽입 결과에 ObjectId가 없음
    #[error("inserted document has no ObjectId")]
    MissingId,

    /// 요청 상한 시간 안에 연산이 끝나지 않음
    #[error("user repository operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(error: mongodb::error::Error) -> Self {
        RepositoryError::Query(error.to_string())
    }
}

/// 사용자 문서 저장소
///
/// 구현체는 여러 요청에서 동시에 사용되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID로 사용자 문서를 조회합니다. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepositoryError>;

    /// 문서를 삽입하고 저장소가 생성한 ObjectId를 반환합니다.
    async fn insert(&self, user: &User) -> Result<ObjectId, RepositoryError>;

    /// `user`에 값이 있는 필드만 `$set`으로 반영하고, 매칭된 문서 수를 반환합니다.
    async fn set_fields(&self, id: ObjectId, user: &User) -> Result<u64, RepositoryError>;

    /// ID로 문서를 삭제하고 삭제된 문서 수를 반환합니다.
    async fn delete(&self, id: ObjectId) -> Result<u64, RepositoryError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// `users` 컬렉션 핸들만 보관하며, 커넥션 풀은 [`Database`]의 클라이언트와 공유됩니다.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.users_collection(),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepositoryError> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;

        Ok(user)
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, RepositoryError> {
        let result = self.collection.insert_one(user).await?;

        result.inserted_id.as_object_id().ok_or(RepositoryError::MissingId)
    }

    async fn set_fields(&self, id: ObjectId, user: &User) -> Result<u64, RepositoryError> {
        let update_doc = user
            .to_set_document()
            .map_err(|e| RepositoryError::Encoding(e.to_string()))?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
            .await?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}
