// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, Category, Country};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::NewsletterId;
use chrono::{DateTime, Utc};

/// Where an article sits in the collected → selected → published workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    Collected,
    Selected,
    Published,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub company: Option<String>,
    pub country: Option<Country>,
    pub category: Option<Category>,
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub selected_for_newsletter: bool,
    pub published_in_newsletter: bool,
    pub newsletter_id: Option<NewsletterId>,
}

impl Article {
    pub fn workflow_state(&self) -> WorkflowState {
        if self.published_in_newsletter {
            WorkflowState::Published
        } else if self.selected_for_newsletter {
            WorkflowState::Selected
        } else {
            WorkflowState::Collected
        }
    }

    pub fn is_pending_selection(&self) -> bool {
        self.workflow_state() == WorkflowState::Selected
    }

    /// Value the selection flag takes after a toggle. Published articles are pinned.
    pub fn toggled_selection(&self) -> DomainResult<bool> {
        if self.published_in_newsletter {
            return Err(DomainError::InvalidState(format!(
                "article {} is already published and cannot be reselected",
                self.id
            )));
        }
        Ok(!self.selected_for_newsletter)
    }

    pub fn ensure_publishable(&self) -> DomainResult<()> {
        match self.workflow_state() {
            WorkflowState::Selected => Ok(()),
            WorkflowState::Published => Err(DomainError::InvalidState(format!(
                "article {} is already published",
                self.id
            ))),
            WorkflowState::Collected => Err(DomainError::InvalidState(format!(
                "article {} is not selected for a newsletter",
                self.id
            ))),
        }
    }

    pub fn mark_published(&mut self, newsletter_id: NewsletterId) {
        self.selected_for_newsletter = true;
        self.published_in_newsletter = true;
        self.newsletter_id = Some(newsletter_id);
    }

    /// Case-insensitive substring match over title, company and summary.
    pub fn matches_text(&self, needle_lowercase: &str) -> bool {
        let contains = |value: Option<&str>| {
            value
                .map(|v| v.to_lowercase().contains(needle_lowercase))
                .unwrap_or(false)
        };
        contains(Some(self.title.as_str()))
            || contains(self.company.as_deref())
            || contains(self.summary.as_deref())
    }
}

/// The one flag an analyst may change directly. Publication flags are only
/// written by `NewsletterWriteRepository::publish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleFlagsUpdate {
    pub id: ArticleId,
    pub selected_for_newsletter: bool,
}

impl ArticleFlagsUpdate {
    pub fn selection(id: ArticleId, selected: bool) -> Self {
        Self {
            id,
            selected_for_newsletter: selected,
        }
    }

    pub fn apply(&self, article: &mut Article) {
        article.selected_for_newsletter = self.selected_for_newsletter;
    }
}
