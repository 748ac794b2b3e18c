use std::collections::HashMap;

use crate::domain::article::entity::{Article, WorkflowState};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};

pub struct CanToggleSelectionSpec<'a> {
    article: &'a Article,
}

impl<'a> CanToggleSelectionSpec<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self { article }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.workflow_state() != WorkflowState::Published
    }
}

/// Every requested id must resolve to a selected, unpublished article.
pub struct PublicationCandidatesSpec<'a> {
    requested: &'a [ArticleId],
    found: &'a [Article],
}

impl<'a> PublicationCandidatesSpec<'a> {
    pub fn new(requested: &'a [ArticleId], found: &'a [Article]) -> Self {
        Self { requested, found }
    }

    pub fn is_satisfied(&self) -> bool {
        self.check().is_ok()
    }

    /// Reports the first offending id, in request order.
    pub fn check(&self) -> DomainResult<()> {
        let by_id: HashMap<ArticleId, &Article> =
            self.found.iter().map(|article| (article.id, article)).collect();

        for id in self.requested {
            let article = by_id
                .get(id)
                .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
            article.ensure_publishable()?;
        }
        Ok(())
    }
}
