//! 사용자 관리 서비스 모듈
//!
//! 문자열 ID를 저장소의 ObjectId로 변환하고, 서버가 부여하는 필드(ID, 생성 시각)를
//! 채운 뒤 리포지토리 호출로 옮기는 역할을 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let mut user = User::from(request);
//! user_service.create(&mut user).await?;
//! assert!(user.id.is_some());
//! ```

pub mod user_service;

pub use user_service::{StoreUserService, UserService};
