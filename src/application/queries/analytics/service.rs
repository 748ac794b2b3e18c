use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, timeout::StoreDeadline},
    domain::{
        article::{Article, ArticleReadRepository},
        newsletter::{Newsletter, NewsletterReadRepository},
    },
};

/// Dashboard rollups. Every call re-reads both stores.
pub struct AnalyticsQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) newsletter_repo: Arc<dyn NewsletterReadRepository>,
    pub(super) deadline: StoreDeadline,
}

impl AnalyticsQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        newsletter_repo: Arc<dyn NewsletterReadRepository>,
        deadline: StoreDeadline,
    ) -> Self {
        Self {
            article_repo,
            newsletter_repo,
            deadline,
        }
    }

    pub(super) async fn snapshot(&self) -> ApplicationResult<(Vec<Article>, Vec<Newsletter>)> {
        let articles = self
            .deadline
            .read("list articles", self.article_repo.list())
            .await?;
        let newsletters = self
            .deadline
            .read("list newsletters", self.newsletter_repo.list())
            .await?;
        Ok((articles, newsletters))
    }
}
