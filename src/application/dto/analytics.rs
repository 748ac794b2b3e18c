use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleDto, DistributionDto, NamedCountDto, NewsletterDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    pub total_articles: usize,
    pub selected_articles: usize,
    pub published_articles: usize,
    pub total_newsletters: usize,
    pub by_category: Vec<NamedCountDto>,
    pub by_country: Vec<NamedCountDto>,
    pub distribution: DistributionDto,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Selected,
    NotSelected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Created,
    Published,
    Views,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPerformanceQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPerformanceDto {
    pub views_by_category: Vec<NamedCountDto>,
    pub views_by_country: Vec<NamedCountDto>,
    pub distribution: DistributionDto,
    pub articles: Vec<ArticleDto>,
    pub newsletters: Vec<NewsletterDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReaderEngagementDto {
    pub total_views: u64,
    pub total_unique_readers: u64,
    pub top_newsletters: Vec<NewsletterDto>,
    pub views_by_category: Vec<NamedCountDto>,
    pub views_by_country: Vec<NamedCountDto>,
}
