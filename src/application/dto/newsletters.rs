use crate::domain::newsletter::Newsletter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub banner_image: Option<String>,
    pub views: u64,
    pub unique_readers: u64,
    pub articles: Vec<i64>,
    pub article_count: usize,
}

impl From<Newsletter> for NewsletterDto {
    fn from(newsletter: Newsletter) -> Self {
        let article_count = newsletter.article_count();
        Self {
            id: newsletter.id.into(),
            title: newsletter.title.into_inner(),
            description: newsletter.description.into_inner(),
            publish_date: newsletter.publish_date,
            banner_image: newsletter.banner_image,
            views: newsletter.views,
            unique_readers: newsletter.unique_readers,
            articles: newsletter.article_ids.into_iter().map(Into::into).collect(),
            article_count,
        }
    }
}

impl From<&Newsletter> for NewsletterDto {
    fn from(newsletter: &Newsletter) -> Self {
        newsletter.clone().into()
    }
}

/// Input of the publish form. Title and description must be non-blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterMeta {
    pub title: String,
    pub description: String,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banner_image: Option<String>,
}

impl NewsletterMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_publish_date(mut self, publish_date: DateTime<Utc>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    pub fn with_banner_image(mut self, banner_image: impl Into<String>) -> Self {
        self.banner_image = Some(banner_image.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishNewsletterRequest {
    #[serde(flatten)]
    pub meta: NewsletterMeta,
    pub article_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryGroupDto {
    /// Country label, or `"Other"` for articles without one.
    pub country: String,
    pub articles: Vec<ArticleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReaderViewDto {
    pub newsletter: NewsletterDto,
    pub groups: Vec<CountryGroupDto>,
}
