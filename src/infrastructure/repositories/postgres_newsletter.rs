// src/infrastructure/repositories/postgres_newsletter.rs
use super::error::{counter, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{
    NewNewsletter, Newsletter, NewsletterDescription, NewsletterId, NewsletterReadRepository,
    NewsletterTitle, NewsletterWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NEWSLETTER_COLUMNS: &str =
    "id, title, description, publish_date, banner_image, views, unique_readers, article_ids";

#[derive(Clone)]
pub struct PostgresNewsletterReadRepository {
    pool: PgPool,
}

impl PostgresNewsletterReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresNewsletterWriteRepository {
    pool: PgPool,
}

impl PostgresNewsletterWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRow {
    id: i64,
    title: String,
    description: String,
    publish_date: DateTime<Utc>,
    banner_image: Option<String>,
    views: Option<i64>,
    unique_readers: Option<i64>,
    article_ids: Option<Vec<i64>>,
}

impl TryFrom<NewsletterRow> for Newsletter {
    type Error = DomainError;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        let newsletter_id = row.id;
        let article_ids = row
            .article_ids
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match ArticleId::new(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(
                        newsletter_id,
                        article_id = raw,
                        "dropping invalid article reference"
                    );
                    None
                }
            })
            .collect();

        Ok(Newsletter {
            id: NewsletterId::new(row.id)?,
            title: NewsletterTitle::new(row.title)?,
            description: NewsletterDescription::new(row.description)?,
            publish_date: row.publish_date,
            banner_image: row
                .banner_image
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty()),
            views: counter(row.views),
            unique_readers: counter(row.unique_readers),
            article_ids,
        })
    }
}

/// Rows that cannot form a newsletter (blank title, blank description) are
/// logged and left out so one bad row does not fail the whole read.
fn decode_row(row: NewsletterRow) -> Option<Newsletter> {
    let newsletter_id = row.id;
    match Newsletter::try_from(row) {
        Ok(newsletter) => Some(newsletter),
        Err(err) => {
            tracing::warn!(newsletter_id, error = %err, "skipping unreadable newsletter row");
            None
        }
    }
}

#[async_trait]
impl NewsletterReadRepository for PostgresNewsletterReadRepository {
    #[tracing::instrument(skip_all)]
    async fn list(&self) -> DomainResult<Vec<Newsletter>> {
        let sql = format!("SELECT {NEWSLETTER_COLUMNS} FROM newsletter ORDER BY publish_date DESC, id DESC");
        let rows = sqlx::query_as::<_, NewsletterRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().filter_map(decode_row).collect())
    }

    #[tracing::instrument(skip_all, fields(newsletter_id = %id))]
    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>> {
        let sql = format!("SELECT {NEWSLETTER_COLUMNS} FROM newsletter WHERE id = $1");
        let row = sqlx::query_as::<_, NewsletterRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(row.and_then(decode_row))
    }
}

#[async_trait]
impl NewsletterWriteRepository for PostgresNewsletterWriteRepository {
    /// Inserts the newsletter and flips every referenced article in one transaction.
    /// Only selected, unpublished articles are updated; if any requested article
    /// does not qualify the whole transaction is rolled back.
    #[tracing::instrument(skip_all, fields(articles = newsletter.article_ids.len()))]
    async fn publish(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let NewNewsletter {
            title,
            description,
            publish_date,
            banner_image,
            article_ids,
        } = newsletter;
        let raw_ids: Vec<i64> = article_ids.iter().map(|id| i64::from(*id)).collect();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO newsletter (title, description, publish_date, banner_image, views, unique_readers, article_ids)
             VALUES ($1, $2, $3, $4, 0, 0, $5)
             RETURNING {NEWSLETTER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, NewsletterRow>(&sql)
            .bind(title.as_str())
            .bind(description.as_str())
            .bind(publish_date)
            .bind(banner_image)
            .bind(&raw_ids)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let updated = sqlx::query(
            "UPDATE apac_article
             SET selected_for_newsletter = TRUE, published_in_newsletter = TRUE, newsletter_id = $1
             WHERE id = ANY($2)
               AND COALESCE(selected_for_newsletter, FALSE)
               AND NOT COALESCE(published_in_newsletter, FALSE)",
        )
        .bind(row.id)
        .bind(&raw_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        if updated != raw_ids.len() as u64 {
            tx.rollback().await.map_err(map_sqlx)?;
            return Err(DomainError::Conflict(format!(
                "expected to publish {} articles but {} were eligible",
                raw_ids.len(),
                updated
            )));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Newsletter::try_from(row)
    }

    #[tracing::instrument(skip_all, fields(newsletter_id = %id))]
    async fn increment_views(&self, id: NewsletterId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE newsletter SET views = views + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("newsletter {id} not found")));
        }
        Ok(())
    }
}
