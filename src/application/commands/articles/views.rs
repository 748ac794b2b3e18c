use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

impl ArticleCommandService {
    pub async fn record_article_view(&self, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::new(id)?;
        self.deadline
            .write("increment article views", self.write_repo.increment_views(id))
            .await
    }
}
