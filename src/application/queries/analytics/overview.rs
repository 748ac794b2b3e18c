use super::AnalyticsQueryService;
use crate::{
    application::{dto::OverviewDto, error::ApplicationResult},
    domain::analytics::{count_by_category, count_by_country, publication_distribution},
};

impl AnalyticsQueryService {
    pub async fn overview(&self) -> ApplicationResult<OverviewDto> {
        let (articles, newsletters) = self.snapshot().await?;
        let distribution = publication_distribution(&articles);

        Ok(OverviewDto {
            total_articles: articles.len(),
            selected_articles: distribution.selected as usize,
            published_articles: distribution.published as usize,
            total_newsletters: newsletters.len(),
            by_category: count_by_category(&articles).into_iter().map(Into::into).collect(),
            by_country: count_by_country(&articles).into_iter().map(Into::into).collect(),
            distribution: distribution.into(),
        })
    }
}
