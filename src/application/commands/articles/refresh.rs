use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::selection::SelectionState};

impl ArticleCommandService {
    /// Reloads `state` from the store and returns the number of articles loaded.
    /// A failed load empties the state instead of keeping stale entries.
    pub async fn refresh(&self, state: &mut SelectionState) -> ApplicationResult<usize> {
        match self.deadline.read("list articles", self.read_repo.list()).await {
            Ok(articles) => {
                state.reset(articles);
                Ok(state.len())
            }
            Err(err) => {
                tracing::warn!(error = %err, "article refresh failed; clearing selection state");
                state.clear();
                Err(err)
            }
        }
    }
}
