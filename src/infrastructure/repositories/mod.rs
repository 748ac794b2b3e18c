// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_analyst;
mod postgres_article;
mod postgres_newsletter;

pub(crate) use error::map_sqlx;
pub use postgres_analyst::PostgresAnalystRepository;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_newsletter::{PostgresNewsletterReadRepository, PostgresNewsletterWriteRepository};
