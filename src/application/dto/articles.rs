use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::analytics::{NamedValue, PublicationDistribution};
use crate::domain::article::{Article, Category, Country, WorkflowState};
use crate::domain::selection::{ArticleFilter, SelectionTab};
use std::str::FromStr;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStateDto {
    Collected,
    Selected,
    Published,
}

impl From<WorkflowState> for WorkflowStateDto {
    fn from(state: WorkflowState) -> Self {
        match state {
            WorkflowState::Collected => Self::Collected,
            WorkflowState::Selected => Self::Selected,
            WorkflowState::Published => Self::Published,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub selected_for_newsletter: bool,
    pub published_in_newsletter: bool,
    #[serde(default)]
    pub newsletter_id: Option<i64>,
    pub state: WorkflowStateDto,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let state = article.workflow_state().into();
        Self {
            id: article.id.into(),
            title: article.title,
            company: article.company,
            country: article.country,
            category: article.category,
            summary: article.summary,
            source_url: article.source_url,
            created_at: article.created_at,
            published_at: article.published_at,
            views: article.views,
            selected_for_newsletter: article.selected_for_newsletter,
            published_in_newsletter: article.published_in_newsletter,
            newsletter_id: article.newsletter_id.map(Into::into),
            state,
        }
    }
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        article.clone().into()
    }
}

/// Dashboard filter as it arrives on the query string. `"all"` or an absent
/// value disables the country/category filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListQuery {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub tab: SelectionTab,
}

fn parse_choice<T>(raw: Option<&str>) -> ApplicationResult<Option<T>>
where
    T: FromStr<Err = crate::domain::errors::DomainError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => T::from_str(value).map(Some).map_err(ApplicationError::from),
    }
}

impl ArticleListQuery {
    pub fn into_filter(self) -> ApplicationResult<ArticleFilter> {
        Ok(ArticleFilter {
            country: parse_choice::<Country>(self.country.as_deref())?,
            category: parse_choice::<Category>(self.category.as_deref())?,
            search: self.search,
            tab: self.tab,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub total: usize,
    pub selected_count: usize,
    pub items: Vec<ArticleDto>,
}

/// Pending selection and already published articles, side by side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOverviewDto {
    pub selected: Vec<ArticleDto>,
    pub published: Vec<ArticleDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NamedCountDto {
    pub name: String,
    pub value: u64,
}

impl From<NamedValue> for NamedCountDto {
    fn from(value: NamedValue) -> Self {
        Self {
            name: value.name,
            value: value.value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionDto {
    pub published: u64,
    pub selected: u64,
    pub not_selected: u64,
    pub total: u64,
}

impl From<PublicationDistribution> for DistributionDto {
    fn from(dist: PublicationDistribution) -> Self {
        Self {
            published: dist.published,
            selected: dist.selected,
            not_selected: dist.not_selected,
            total: dist.total(),
        }
    }
}
