//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] trait에만 의존하고,
//! MongoDB 구현체는 [`users::MongoUserRepository`]가 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> =
//!     Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_id(object_id).await?;
//! ```

pub mod users;
