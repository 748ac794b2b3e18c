use super::NewsletterQueryService;
use crate::application::{dto::NewsletterDto, error::ApplicationResult};

impl NewsletterQueryService {
    /// Published newsletters, newest first, with their article counts.
    pub async fn newsletter_gallery(&self) -> ApplicationResult<Vec<NewsletterDto>> {
        let newsletters = self
            .deadline
            .read("list newsletters", self.newsletter_repo.list())
            .await?;
        Ok(newsletters.into_iter().map(Into::into).collect())
    }
}
