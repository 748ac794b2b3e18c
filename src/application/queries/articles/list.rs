use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto, SelectionOverviewDto},
        error::ApplicationResult,
    },
    domain::selection::{ArticleFilter, SelectionState},
};

impl ArticleQueryService {
    /// Dashboard listing: the current collection narrowed by `filter`.
    pub async fn list_articles(&self, filter: &ArticleFilter) -> ApplicationResult<ArticleListDto> {
        let state = self.load_state().await?;
        let items: Vec<ArticleDto> = state.filtered(filter).into_iter().map(Into::into).collect();
        Ok(ArticleListDto {
            total: items.len(),
            selected_count: state.selected_count(),
            items,
        })
    }

    /// Articles awaiting publication next to those already published.
    pub async fn selection_overview(&self) -> ApplicationResult<SelectionOverviewDto> {
        let state = self.load_state().await?;
        let published = self
            .deadline
            .read("list published articles", self.read_repo.list_published())
            .await?;

        Ok(SelectionOverviewDto {
            selected: state.pending_selection().into_iter().map(Into::into).collect(),
            published: published.into_iter().map(Into::into).collect(),
        })
    }

    /// A fresh selection state, for callers that drive toggles and publishing themselves.
    pub async fn load_state(&self) -> ApplicationResult<SelectionState> {
        let articles = self
            .deadline
            .read("list articles", self.read_repo.list())
            .await?;
        Ok(SelectionState::new(articles))
    }
}
