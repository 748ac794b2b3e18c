// src/domain/newsletter/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::newsletter::value_objects::{
    NewsletterDescription, NewsletterId, NewsletterTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: NewsletterTitle,
    pub description: NewsletterDescription,
    pub publish_date: DateTime<Utc>,
    pub banner_image: Option<String>,
    pub views: u64,
    pub unique_readers: u64,
    pub article_ids: Vec<ArticleId>,
}

impl Newsletter {
    pub fn contains(&self, id: ArticleId) -> bool {
        self.article_ids.contains(&id)
    }

    pub fn article_count(&self) -> usize {
        self.article_ids.len()
    }
}

/// A newsletter about to be written by the publication engine. Counters start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNewsletter {
    pub title: NewsletterTitle,
    pub description: NewsletterDescription,
    pub publish_date: DateTime<Utc>,
    pub banner_image: Option<String>,
    pub article_ids: Vec<ArticleId>,
}
