use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A shoot (game, tournament, team day) that albums can hang off.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub sport: Option<String>,
    pub created_at: DateTime<Utc>,
}
