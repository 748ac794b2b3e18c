use super::map_sqlx;
use crate::domain::analyst::{
    Analyst, AnalystId, AnalystRepository, Email, NewAnalyst, PasswordHash,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAnalystRepository {
    pool: PgPool,
}

impl PostgresAnalystRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnalystRow {
    id: i64,
    email: String,
    display_name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnalystRow> for Analyst {
    type Error = DomainError;

    fn try_from(row: AnalystRow) -> Result<Self, Self::Error> {
        Ok(Analyst {
            id: AnalystId::new(row.id)?,
            email: Email::new(row.email)?,
            display_name: row.display_name,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AnalystRepository for PostgresAnalystRepository {
    async fn insert(&self, analyst: NewAnalyst) -> DomainResult<Analyst> {
        let row = sqlx::query_as::<_, AnalystRow>(
            "INSERT INTO analyst (email, display_name, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, display_name, password_hash, created_at",
        )
        .bind(analyst.email.as_str())
        .bind(analyst.display_name)
        .bind(analyst.password_hash.as_str())
        .bind(analyst.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Analyst::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Analyst>> {
        let row = sqlx::query_as::<_, AnalystRow>(
            "SELECT id, email, display_name, password_hash, created_at
             FROM analyst WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Analyst::try_from).transpose()
    }
}
