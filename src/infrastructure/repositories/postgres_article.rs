// src/infrastructure/repositories/postgres_article.rs
use super::error::{counter, map_sqlx};
use crate::domain::article::{
    Article, ArticleFlagsUpdate, ArticleId, ArticleReadRepository, ArticleWriteRepository,
    Category, Country,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::NewsletterId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

const ARTICLE_COLUMNS: &str = "id, title, company, country, category, summary, source_url, \
     created_at, published_at, views, selected_for_newsletter, published_in_newsletter, newsletter_id";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw `apac_article` row. Every column except the key may be missing.
#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: Option<String>,
    company: Option<String>,
    country: Option<String>,
    category: Option<String>,
    summary: Option<String>,
    source_url: Option<String>,
    created_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    views: Option<i64>,
    selected_for_newsletter: Option<bool>,
    published_in_newsletter: Option<bool>,
    newsletter_id: Option<i64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_label<T>(id: i64, field: &'static str, raw: Option<String>) -> Option<T>
where
    T: FromStr,
{
    let raw = non_blank(raw)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(article_id = id, field, value = %raw, "unrecognised label; treating as missing");
            None
        }
    }
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let published = row.published_in_newsletter.unwrap_or(false);
        let newsletter_id = row.newsletter_id.and_then(|id| NewsletterId::new(id).ok());
        if published && newsletter_id.is_none() {
            tracing::warn!(article_id = row.id, "published article without newsletter reference");
        }

        Article {
            id: ArticleId(row.id),
            title: row.title.map(|t| t.trim().to_string()).unwrap_or_default(),
            company: non_blank(row.company),
            country: parse_label::<Country>(row.id, "country", row.country),
            category: parse_label::<Category>(row.id, "category", row.category),
            summary: non_blank(row.summary),
            source_url: non_blank(row.source_url),
            created_at: row.created_at,
            published_at: row.published_at,
            views: counter(row.views),
            selected_for_newsletter: published || row.selected_for_newsletter.unwrap_or(false),
            published_in_newsletter: published,
            newsletter_id,
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    #[tracing::instrument(skip_all)]
    async fn list(&self) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM apac_article
             WHERE title IS NOT NULL AND btrim(title) <> ''
             ORDER BY COALESCE(selected_for_newsletter, FALSE) DESC, id ASC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    #[tracing::instrument(skip_all)]
    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM apac_article
             WHERE published_in_newsletter = TRUE
             ORDER BY id ASC"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    #[tracing::instrument(skip_all, fields(ids = ids.len()))]
    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM apac_article WHERE id = ANY($1) ORDER BY id ASC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(raw)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    #[tracing::instrument(skip_all, fields(article_id = %update.id))]
    async fn update_flags(&self, update: ArticleFlagsUpdate) -> DomainResult<Article> {
        let ArticleFlagsUpdate {
            id,
            selected_for_newsletter,
        } = update;

        let sql = format!(
            "UPDATE apac_article SET selected_for_newsletter = $1 WHERE id = $2 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(selected_for_newsletter)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;

        Ok(Article::from(row))
    }

    #[tracing::instrument(skip_all, fields(article_id = %id))]
    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE apac_article SET views = COALESCE(views, 0) + 1 WHERE id = $1",
        )
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }
        Ok(())
    }
}
