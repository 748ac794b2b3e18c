// tests/support/builders.rs
use chrono::Duration;

use bulletin_core::domain::article::*;
use bulletin_core::domain::newsletter::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    company: Option<String>,
    country: Option<Country>,
    category: Option<Category>,
    summary: Option<String>,
    views: u64,
    selected: bool,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Regional bank update {id}"),
            company: None,
            country: None,
            category: None,
            summary: None,
            views: 0,
            selected: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: self.title,
            company: self.company,
            country: self.country,
            category: self.category,
            summary: self.summary,
            source_url: Some(format!("https://news.example.com/{}", self.id)),
            created_at: fixed_now() - Duration::days(self.id),
            published_at: None,
            views: self.views,
            selected_for_newsletter: self.selected,
            published_in_newsletter: false,
            newsletter_id: None,
        }
    }
}

pub struct NewsletterBuilder {
    id: i64,
    days_ago: i64,
    views: u64,
    unique_readers: u64,
    article_ids: Vec<i64>,
}

impl NewsletterBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            days_ago: 0,
            views: 0,
            unique_readers: 0,
            article_ids: Vec::new(),
        }
    }

    pub fn days_ago(mut self, days: i64) -> Self {
        self.days_ago = days;
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn unique_readers(mut self, readers: u64) -> Self {
        self.unique_readers = readers;
        self
    }

    pub fn articles(mut self, ids: &[i64]) -> Self {
        self.article_ids = ids.to_vec();
        self
    }

    pub fn build(self) -> Newsletter {
        Newsletter {
            id: NewsletterId::new(self.id).unwrap(),
            title: NewsletterTitle::new(format!("APAC Banking Brief #{}", self.id)).unwrap(),
            description: NewsletterDescription::new("Weekly digest").unwrap(),
            publish_date: fixed_now() - Duration::days(self.days_ago),
            banner_image: None,
            views: self.views,
            unique_readers: self.unique_readers,
            article_ids: self.article_ids.into_iter().map(ArticleId).collect(),
        }
    }
}
