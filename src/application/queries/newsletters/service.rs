use std::sync::Arc;

use crate::{
    application::timeout::StoreDeadline,
    domain::{
        article::ArticleReadRepository,
        newsletter::{NewsletterReadRepository, NewsletterWriteRepository},
    },
};

pub struct NewsletterQueryService {
    pub(super) newsletter_repo: Arc<dyn NewsletterReadRepository>,
    /// Only used to count reader views.
    pub(super) view_counter: Arc<dyn NewsletterWriteRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) deadline: StoreDeadline,
}

impl NewsletterQueryService {
    pub fn new(
        newsletter_repo: Arc<dyn NewsletterReadRepository>,
        view_counter: Arc<dyn NewsletterWriteRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        deadline: StoreDeadline,
    ) -> Self {
        Self {
            newsletter_repo,
            view_counter,
            article_repo,
            deadline,
        }
    }
}
