use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user (client or staff). Identity itself is issued by the external auth
/// provider; this row carries tenant linkage and the role that gates
/// administrative surfaces.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    PlatformAdmin,
    TenantOwner,
    TenantAdmin,
    TenantStaff,
    Client,
}

impl UserRole {
    /// Roles allowed into studio administration surfaces.
    pub fn is_admin(self) -> bool {
        matches!(
            self,
            UserRole::PlatformAdmin | UserRole::TenantOwner | UserRole::TenantAdmin
        )
    }
}
