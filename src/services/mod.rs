//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 컨트롤러는 [`users::UserService`] trait에만 의존하므로
//! 테스트에서는 저장소 없이 대역(test double)으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{StoreUserService, UserService};
//!
//! let user_service: Arc<dyn UserService> = Arc::new(StoreUserService::new(user_repo));
//! let user = user_service.get("507f1f77bcf86cd799439011").await?;
//! ```

pub mod users;
