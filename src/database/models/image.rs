use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One photo in an album. tenant_id is denormalized so portfolio queries
/// never need to hop through albums.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub album_id: Uuid,
    pub storage_key: String,
    pub thumbnail_key: Option<String>,
    pub watermarked_key: Option<String>,
    pub original_filename: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub size_bytes: Option<i64>,
    /// Marks the image reusable in public marketing galleries, independent
    /// of its owning album's access rules.
    pub is_portfolio: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl Image {
    /// Suggested filename for a download: the original upload name when we
    /// have it, otherwise a deterministic synthetic name.
    pub fn download_filename(&self) -> String {
        match &self.original_filename {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("photo-{}.jpg", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn image(original_filename: Option<&str>) -> Image {
        Image {
            id: Uuid::nil(),
            tenant_id: Uuid::nil(),
            album_id: Uuid::nil(),
            storage_key: "t/a/i.jpg".to_string(),
            thumbnail_key: None,
            watermarked_key: None,
            original_filename: original_filename.map(str::to_string),
            width: None,
            height: None,
            size_bytes: None,
            is_portfolio: false,
            sort_order: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn download_filename_prefers_original() {
        assert_eq!(image(Some("IMG_0042.jpg")).download_filename(), "IMG_0042.jpg");
    }

    #[test]
    fn download_filename_falls_back_to_synthetic_name() {
        assert_eq!(
            image(None).download_filename(),
            format!("photo-{}.jpg", Uuid::nil())
        );
        assert_eq!(
            image(Some("")).download_filename(),
            format!("photo-{}.jpg", Uuid::nil())
        );
    }
}
