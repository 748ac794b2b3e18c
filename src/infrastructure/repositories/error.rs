use crate::domain::errors::DomainError;

const CNT_ANALYST_EMAIL: &str = "analyst_email_key";
const CNT_ARTICLE_NEWSLETTER: &str = "apac_article_newsletter_id_fkey";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "apac_article_published_requires_selection_chk";
const CNT_NEWSLETTER_COUNTERS: &str = "newsletter_counters_non_negative_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ANALYST_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_ARTICLE_NEWSLETTER => DomainError::NotFound("newsletter not found".into()),
                    CNT_ARTICLE_PUBLISHED_CHECK => DomainError::InvalidState(
                        "published articles must be selected and reference a newsletter".into(),
                    ),
                    CNT_NEWSLETTER_COUNTERS => {
                        DomainError::Validation("newsletter counters cannot be negative".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            match db_err.code().as_deref() {
                Some("23505") => DomainError::Conflict("unique constraint violated".into()),
                Some("23503") => DomainError::NotFound("referenced record not found".into()),
                Some("23514") => DomainError::Validation("check constraint violated".into()),
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        sqlx::Error::PoolTimedOut => DomainError::Persistence("database pool timed out".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Counters are `BIGINT` in storage; anything negative is treated as zero.
pub(super) fn counter(value: Option<i64>) -> u64 {
    value.and_then(|v| u64::try_from(v).ok()).unwrap_or(0)
}
