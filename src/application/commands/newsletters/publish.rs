// src/application/commands/newsletters/publish.rs
use super::NewsletterCommandService;
use crate::{
    application::{
        dto::{NewsletterDto, NewsletterMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, specifications::PublicationCandidatesSpec},
        newsletter::{NewNewsletter, Newsletter, NewsletterDescription, NewsletterTitle},
        selection::SelectionState,
    },
};

impl NewsletterCommandService {
    /// Bundles selected, unpublished articles into a new newsletter.
    ///
    /// The newsletter row and every article flag are written together. Nothing
    /// is written when a precondition fails.
    #[tracing::instrument(skip_all, fields(articles = article_ids.len()))]
    pub async fn publish(
        &self,
        meta: NewsletterMeta,
        article_ids: Vec<i64>,
    ) -> ApplicationResult<NewsletterDto> {
        let ids = article_ids
            .into_iter()
            .map(ArticleId::new)
            .collect::<Result<Vec<_>, _>>()?;
        let newsletter = self.publish_ids(meta, ids).await?;
        Ok(newsletter.into())
    }

    /// Publishes the pending selection held in `state`.
    ///
    /// On success the state is reloaded from the store. On failure it is kept as
    /// it was so the analyst can retry with the same selection.
    pub async fn publish_from(
        &self,
        state: &mut SelectionState,
        meta: NewsletterMeta,
    ) -> ApplicationResult<NewsletterDto> {
        let newsletter = self.publish_ids(meta, state.pending_ids()).await?;

        match self.deadline.read("list articles", self.article_repo.list()).await {
            Ok(articles) => state.reset(articles),
            Err(err) => {
                tracing::warn!(error = %err, "reload after publish failed; applying flags locally");
                for id in &newsletter.article_ids {
                    if let Some(mut article) = state.find(*id).cloned() {
                        article.mark_published(newsletter.id);
                        state.replace(article);
                    }
                }
            }
        }
        Ok(newsletter.into())
    }

    async fn publish_ids(
        &self,
        meta: NewsletterMeta,
        ids: Vec<ArticleId>,
    ) -> ApplicationResult<Newsletter> {
        let ids = dedupe(ids);
        if ids.is_empty() {
            return Err(ApplicationError::EmptySelection);
        }
        let title = NewsletterTitle::new(meta.title)?;
        let description = NewsletterDescription::new(meta.description)?;
        let banner_image = meta
            .banner_image
            .map(|banner| banner.trim().to_string())
            .filter(|banner| !banner.is_empty());

        let found = self
            .deadline
            .read("find articles", self.article_repo.find_by_ids(&ids))
            .await?;
        PublicationCandidatesSpec::new(&ids, &found).check()?;

        let draft = NewNewsletter {
            title,
            description,
            publish_date: meta.publish_date.unwrap_or_else(|| self.clock.now()),
            banner_image,
            article_ids: ids,
        };

        let newsletter = self
            .deadline
            .bounded("publish newsletter", self.newsletter_repo.publish(draft))
            .await?
            .map_err(|err| {
                tracing::error!(error = %err, "newsletter publication failed");
                ApplicationError::publication(err.to_string())
            })?;

        tracing::info!(
            newsletter_id = %newsletter.id,
            articles = newsletter.article_count(),
            "newsletter published"
        );
        Ok(newsletter)
    }
}

/// Keeps the first occurrence of each id.
fn dedupe(ids: Vec<ArticleId>) -> Vec<ArticleId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
