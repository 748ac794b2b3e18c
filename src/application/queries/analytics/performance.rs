// src/application/queries/analytics/performance.rs
use std::cmp::Ordering;

use super::AnalyticsQueryService;
use crate::{
    application::{
        dto::{ContentPerformanceDto, ContentPerformanceQuery, SortKey, SortOrder, StatusFilter},
        error::ApplicationResult,
    },
    domain::{
        analytics::{Dimension, publication_distribution, views_by_dimension},
        article::{Article, WorkflowState},
        newsletter::Newsletter,
    },
};

impl AnalyticsQueryService {
    pub async fn content_performance(
        &self,
        query: ContentPerformanceQuery,
    ) -> ApplicationResult<ContentPerformanceDto> {
        let (articles, mut newsletters) = self.snapshot().await?;

        let views_by_category = views_by_dimension(&articles, Dimension::Category);
        let views_by_country = views_by_dimension(&articles, Dimension::Country);
        let distribution = publication_distribution(&articles);

        let mut table: Vec<Article> = articles
            .into_iter()
            .filter(|article| matches_status(article, query.status))
            .collect();
        table.sort_by(|a, b| directed(compare_articles(a, b, query.sort), query.order));
        newsletters.sort_by(|a, b| directed(compare_newsletters(a, b), query.order));

        Ok(ContentPerformanceDto {
            views_by_category: views_by_category.into_iter().map(Into::into).collect(),
            views_by_country: views_by_country.into_iter().map(Into::into).collect(),
            distribution: distribution.into(),
            articles: table.into_iter().map(Into::into).collect(),
            newsletters: newsletters.into_iter().map(Into::into).collect(),
        })
    }
}

fn matches_status(article: &Article, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Published => article.workflow_state() == WorkflowState::Published,
        StatusFilter::Selected => article.workflow_state() == WorkflowState::Selected,
        StatusFilter::NotSelected => article.workflow_state() == WorkflowState::Collected,
    }
}

/// Ascending comparison for `key`. Missing publish timestamps sort first.
fn compare_articles(a: &Article, b: &Article, key: SortKey) -> Ordering {
    match key {
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Published => a.published_at.cmp(&b.published_at),
        SortKey::Views => a.views.cmp(&b.views),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
    .then_with(|| a.id.0.cmp(&b.id.0))
}

fn compare_newsletters(a: &Newsletter, b: &Newsletter) -> Ordering {
    a.publish_date
        .cmp(&b.publish_date)
        .then_with(|| a.id.0.cmp(&b.id.0))
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
