// src/application/commands/articles/toggle.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleFlagsUpdate, ArticleId, specifications::CanToggleSelectionSpec},
        selection::SelectionState,
    },
};

impl ArticleCommandService {
    /// Flips `selected_for_newsletter` for one article and returns the stored result.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_selection(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        let updated = self.toggle(id).await?;
        Ok(updated.into())
    }

    /// Toggles an article of `state`. The state entry is replaced only after the
    /// store acknowledged the write; on any error `state` is left as it was.
    #[tracing::instrument(skip(self, state))]
    pub async fn toggle_in(&self, state: &mut SelectionState, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        if state.find(id).is_none() {
            return Err(ApplicationError::not_found(format!("article {id} not found")));
        }
        let updated = self.toggle(id).await?;
        state.replace(updated.clone());
        Ok(updated.into())
    }

    async fn toggle(&self, id: ArticleId) -> ApplicationResult<Article> {
        let current = self
            .deadline
            .read("find article", self.read_repo.find_by_ids(&[id]))
            .await?
            .into_iter()
            .find(|article| article.id == id)
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;

        if !CanToggleSelectionSpec::new(&current).is_satisfied() {
            return Err(ApplicationError::invalid_state(format!(
                "article {id} is already published and cannot be reselected"
            )));
        }
        let selected = current.toggled_selection()?;

        let update = ArticleFlagsUpdate::selection(id, selected);
        let updated = self
            .deadline
            .write("update article flags", self.write_repo.update_flags(update))
            .await?;
        tracing::debug!(article_id = %id, selected, "article selection toggled");
        Ok(updated)
    }
}
