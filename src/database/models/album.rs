use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A collection of images owned by one tenant, optionally tied to a client
/// profile and an event. Shared anonymously via `share_token`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Album {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub event_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub status: AlbumStatus,
    pub is_public: bool,
    /// Opaque, unguessable; UNIQUE in the database and generated from
    /// 128 bits of randomness (see sql/schema.sql), never sequential.
    pub share_token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub cover_image_key: Option<String>,
    pub image_count: i32,
    pub total_size_bytes: i64,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle stage of an album. Advances draft -> processing -> proofing ->
/// ready -> delivered, though proofing/ready may loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "album_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AlbumStatus {
    Draft,
    Processing,
    Proofing,
    Ready,
    Delivered,
}

impl AlbumStatus {
    /// States in which album contents may be shown to a share-token holder.
    pub fn is_disclosable(self) -> bool {
        matches!(self, AlbumStatus::Ready | AlbumStatus::Delivered)
    }
}
