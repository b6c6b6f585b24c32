use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::receipt::model::Receipt;
use business::domain::receipt::repository::ReceiptRepository;

use super::entity::ReceiptEntity;

const COLUMNS: &str = "id, name, key, data, created_at";

pub struct ReceiptRepositoryPostgres {
    pool: PgPool,
}

impl ReceiptRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReceiptRepository for ReceiptRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Receipt>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReceiptEntity>(&format!(
            "SELECT {} FROM receipts ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Receipt, RepositoryError> {
        let entity = sqlx::query_as::<_, ReceiptEntity>(&format!(
            "SELECT {} FROM receipts WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Receipt>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReceiptEntity>(&format!(
            "SELECT {} FROM receipts WHERE id = ANY($1) ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, receipt: &Receipt) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO receipts (id, name, key, data, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                data = EXCLUDED.data"#,
        )
        .bind(receipt.id)
        .bind(&receipt.name)
        .bind(&receipt.key)
        .bind(Json(&receipt.data))
        .bind(receipt.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM receipts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
