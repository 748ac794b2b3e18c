// src/application/commands/newsletters/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::time::Clock, timeout::StoreDeadline},
    domain::{article::ArticleReadRepository, newsletter::NewsletterWriteRepository},
};

pub struct NewsletterCommandService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) newsletter_repo: Arc<dyn NewsletterWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) deadline: StoreDeadline,
}

impl NewsletterCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        newsletter_repo: Arc<dyn NewsletterWriteRepository>,
        clock: Arc<dyn Clock>,
        deadline: StoreDeadline,
    ) -> Self {
        Self {
            article_repo,
            newsletter_repo,
            clock,
            deadline,
        }
    }
}
