//! JSONB document collection on PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::debug;

use cardoctor_core::error::{AppError, ErrorKind};
use cardoctor_core::result::AppResult;
use cardoctor_core::traits::DocumentCollection;
use cardoctor_core::types::{
    DeleteResult, Document, DocumentFilter, DocumentId, ID_FIELD, InsertResult, Projection,
    UpdateResult, stamp_id,
};

/// A collection stored as a table of `(id, document, created_at)` rows.
#[derive(Debug, Clone)]
pub struct PgCollection {
    pool: PgPool,
    table: String,
}

impl PgCollection {
    /// Binds a collection to a table, creating the table if it is missing.
    ///
    /// The name is interpolated into SQL, so only lowercase ASCII
    /// identifiers are accepted.
    pub async fn open(pool: PgPool, name: &str) -> AppResult<Self> {
        if !is_safe_identifier(name) {
            return Err(AppError::configuration(format!(
                "Invalid collection name: '{name}'"
            )));
        }

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {name} (\
             id UUID PRIMARY KEY, \
             document JSONB NOT NULL, \
             created_at TIMESTAMPTZ NOT NULL DEFAULT NOW())"
        );
        sqlx::query(&ddl)
            .execute(&pool)
            .await
            .map_err(|e| db_error(format!("Failed to prepare collection '{name}'"), e))?;

        Ok(Self {
            pool,
            table: name.to_string(),
        })
    }
}

#[async_trait]
impl DocumentCollection for PgCollection {
    fn name(&self) -> &str {
        &self.table
    }

    async fn find(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        let sql = format!(
            "SELECT document FROM {} WHERE document @> $1 ORDER BY created_at, id",
            self.table
        );
        let rows: Vec<Json<Document>> = sqlx::query_scalar(&sql)
            .bind(Json(filter.to_json()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to query {}", self.table), e))?;

        debug!(collection = %self.table, count = rows.len(), "find");
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_one(
        &self,
        id: &DocumentId,
        projection: Option<&Projection>,
    ) -> AppResult<Option<Document>> {
        let sql = format!("SELECT document FROM {} WHERE id = $1", self.table);
        let row: Option<Json<Document>> = sqlx::query_scalar(&sql)
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to find in {}", self.table), e))?;

        Ok(row.map(|Json(doc)| match projection {
            Some(p) => p.apply(&doc),
            None => doc,
        }))
    }

    async fn insert_one(&self, mut doc: Document) -> AppResult<InsertResult> {
        let id = DocumentId::new();
        stamp_id(&mut doc, id);

        let sql = format!(
            "INSERT INTO {} (id, document) VALUES ($1, $2)",
            self.table
        );
        sqlx::query(&sql)
            .bind(id.into_uuid())
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to insert into {}", self.table), e))?;

        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update_one(&self, id: &DocumentId, mut fields: Document) -> AppResult<UpdateResult> {
        fields.remove(ID_FIELD);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let select = format!(
            "SELECT document FROM {} WHERE id = $1 FOR UPDATE",
            self.table
        );
        let current: Option<Json<Document>> = sqlx::query_scalar(&select)
            .bind(id.into_uuid())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error(format!("Failed to lock row in {}", self.table), e))?;

        let Some(Json(mut doc)) = current else {
            return Ok(UpdateResult::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields {
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                modified = true;
            }
        }

        if modified {
            let update = format!("UPDATE {} SET document = $2 WHERE id = $1", self.table);
            sqlx::query(&update)
                .bind(id.into_uuid())
                .bind(Json(&doc))
                .execute(&mut *tx)
                .await
                .map_err(|e| db_error(format!("Failed to update {}", self.table), e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))?;

        Ok(UpdateResult::new(1, u64::from(modified)))
    }

    async fn delete_one(&self, id: &DocumentId) -> AppResult<DeleteResult> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to delete from {}", self.table), e))?;

        Ok(DeleteResult::new(result.rows_affected()))
    }

    async fn count(&self) -> AppResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let total: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(format!("Failed to count {}", self.table), e))?;
        Ok(total as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| db_error("Health check failed", e))
    }
}

fn db_error(message: impl Into<String>, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, message, err)
}

fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 63 && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
