use super::AnalyticsQueryService;
use crate::{
    application::{dto::ReaderEngagementDto, error::ApplicationResult},
    domain::analytics::{Dimension, top_newsletters_by_views, views_by_dimension},
};

const TOP_NEWSLETTERS: usize = 5;

impl AnalyticsQueryService {
    pub async fn reader_engagement(&self) -> ApplicationResult<ReaderEngagementDto> {
        let (articles, newsletters) = self.snapshot().await?;

        Ok(ReaderEngagementDto {
            total_views: newsletters
                .iter()
                .fold(0u64, |acc, n| acc.saturating_add(n.views)),
            total_unique_readers: newsletters
                .iter()
                .fold(0u64, |acc, n| acc.saturating_add(n.unique_readers)),
            top_newsletters: top_newsletters_by_views(&newsletters, TOP_NEWSLETTERS)
                .into_iter()
                .map(Into::into)
                .collect(),
            views_by_category: views_by_dimension(&articles, Dimension::Category)
                .into_iter()
                .map(Into::into)
                .collect(),
            views_by_country: views_by_dimension(&articles, Dimension::Country)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }
}
