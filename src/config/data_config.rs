//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 연결, HTTP 서버 바인딩, 요청 속도 제한 설정을 관리합니다.

use log::warn;
use std::env;
use std::time::Duration;

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 사용자 문서가 저장되는 컬렉션 이름
    pub const USERS_COLLECTION: &'static str = "users";

    /// MongoDB 연결 문자열을 반환합니다.
    ///
    /// 설정되지 않은 경우 빈 문자열을 반환하며,
    /// 빈 값은 [`crate::db::init_db`]에서 기동 실패로 처리됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: MongoDB 연결 URI
    pub fn url() -> String {
        env::var("DATABASE_URL").unwrap_or_default()
    }

    /// 사용할 데이터베이스 이름을 반환합니다. 기본값: "ryde"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "ryde".to_string())
    }

    /// MongoDB 클라이언트에 보고할 애플리케이션 이름
    pub fn app_name() -> String {
        "user_service".to_string()
    }

    /// 서버 연결 타임아웃. 기본값: 10초
    pub fn connect_timeout() -> Duration {
        Duration::from_secs(Self::secs_from_env("DATABASE_CONNECT_TIMEOUT_SECS", 10))
    }

    /// 서버 선택 타임아웃. 기본값: 10초
    ///
    /// 저장소에 도달할 수 없을 때 요청이 실패하기까지의 상한입니다.
    pub fn server_selection_timeout() -> Duration {
        Duration::from_secs(Self::secs_from_env(
            "DATABASE_SERVER_SELECTION_TIMEOUT_SECS",
            10,
        ))
    }

    /// 요청 하나가 저장소 연산을 기다리는 최대 시간. 기본값: 10초
    ///
    /// 이 시간을 넘긴 연산은 취소되고 `StoreError`로 보고됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_REQUEST_TIMEOUT_SECS`
    pub fn request_timeout() -> Duration {
        Duration::from_secs(Self::secs_from_env("DATABASE_REQUEST_TIMEOUT_SECS", 10))
    }

    fn secs_from_env(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(default)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
///
/// `actix-governor` 미들웨어에 전달되는 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// 파싱에 실패하거나 0인 값은 경고를 남기고 기본값으로 대체합니다.
    ///
    /// # Environment Variables
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self {
            per_second: parse_positive("RATE_LIMIT_PER_SECOND", Self::DEFAULT_PER_SECOND),
            burst_size: parse_positive("RATE_LIMIT_BURST_SIZE", Self::DEFAULT_BURST_SIZE),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: Self::DEFAULT_PER_SECOND,
            burst_size: Self::DEFAULT_BURST_SIZE,
        }
    }
}

fn parse_positive<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + PartialEq + From<u8>,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) if value != T::from(0) => value,
        Ok(_) => {
            warn!("{}는 0일 수 없습니다. 기본값 사용", key);
            default
        }
        Err(e) => {
            warn!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }
    }
}
