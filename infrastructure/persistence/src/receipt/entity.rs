use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::extraction::model::ReceiptExtraction;
use business::domain::receipt::model::Receipt;

#[derive(Debug, FromRow)]
pub struct ReceiptEntity {
    pub id: Uuid,
    pub name: String,
    pub key: String,
    pub data: Json<ReceiptExtraction>,
    pub created_at: DateTime<Utc>,
}

impl ReceiptEntity {
    pub fn into_domain(self) -> Receipt {
        Receipt::from_repository(self.id, self.name, self.key, self.data.0, self.created_at)
    }
}
