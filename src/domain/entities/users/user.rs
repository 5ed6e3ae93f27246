//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{Document, oid::ObjectId, to_document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 모든 필드가 독립적으로 존재하거나 없을 수 있습니다.
/// `id`는 삽입 시 저장소가 부여하고, `created_at`은 생성 시 서비스가 부여합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 생년월일 (형식 검증 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 생성 시각 (RFC 3339, UTC)
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 생성 시각을 기록합니다. 호출자가 넣은 값은 덮어씁니다.
    pub fn mark_created(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    /// `_id`를 제외한 필드 중 하나라도 값이 있는지 확인
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.dob.is_some()
            || self.address.is_some()
            || self.description.is_some()
            || self.created_at.is_some()
    }

    /// `$set` 연산에 사용할 문서를 생성합니다.
    ///
    /// 값이 있는 필드만 포함되며 `_id`는 절대 포함되지 않습니다.
    pub fn to_set_document(&self) -> Result<Document, mongodb::bson::ser::Error> {
        let mut document = to_document(self)?;
        document.remove("_id");
        Ok(document)
    }
}
