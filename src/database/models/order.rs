use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A client's purchase of a product, optionally tied to an album. Payment
/// itself happens at the external provider; this row tracks the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub client_id: Uuid,
    pub product_id: Uuid,
    pub album_id: Option<Uuid>,
    pub status: OrderStatus,
    pub amount_cents: i32,
    pub platform_fee_cents: i32,
    pub paid_at: Option<DateTime<Utc>>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// pending -> paid -> processing -> fulfilled, or -> refunded/cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Fulfilled,
    Refunded,
    Cancelled,
}
