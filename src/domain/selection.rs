// src/domain/selection.rs
//! In-memory view over the article collection used by the analyst dashboard.
//!
//! The state is an explicit value owned by the caller. The selection services
//! only replace entries in it after the store has acknowledged a write.

use crate::domain::article::{Article, ArticleId, Category, Country};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionTab {
    #[default]
    All,
    Selected,
    /// Every third article of the country/category-filtered list, starting with the first.
    Featured,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// `None` means "all".
    pub country: Option<Country>,
    /// `None` means "all".
    pub category: Option<Category>,
    pub search: Option<String>,
    pub tab: SelectionTab,
}

impl ArticleFilter {
    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_tab(mut self, tab: SelectionTab) -> Self {
        self.tab = tab;
        self
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

/// Applies country, category, tab and free text in that order.
pub fn filter_articles<'a>(articles: &'a [Article], filter: &ArticleFilter) -> Vec<&'a Article> {
    let narrowed = articles
        .iter()
        .filter(|a| filter.country.is_none_or(|c| a.country == Some(c)))
        .filter(|a| filter.category.is_none_or(|c| a.category == Some(c)));

    let tabbed: Vec<&Article> = match filter.tab {
        SelectionTab::All => narrowed.collect(),
        SelectionTab::Selected => narrowed.filter(|a| a.selected_for_newsletter).collect(),
        SelectionTab::Featured => narrowed
            .enumerate()
            .filter(|(index, _)| index % 3 == 0)
            .map(|(_, article)| article)
            .collect(),
    };

    match filter.search_needle() {
        Some(needle) => tabbed
            .into_iter()
            .filter(|a| a.matches_text(&needle))
            .collect(),
        None => tabbed,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    articles: Vec<Article>,
}

impl SelectionState {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn find(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn filtered(&self, filter: &ArticleFilter) -> Vec<&Article> {
        filter_articles(&self.articles, filter)
    }

    /// Selected articles that have not been published yet.
    pub fn pending_selection(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.is_pending_selection())
            .collect()
    }

    pub fn pending_ids(&self) -> Vec<ArticleId> {
        self.pending_selection().into_iter().map(|a| a.id).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.articles
            .iter()
            .filter(|a| a.selected_for_newsletter)
            .count()
    }

    /// Swaps in the stored version of an article. Returns `false` if the id is unknown.
    pub fn replace(&mut self, article: Article) -> bool {
        match self.articles.iter_mut().find(|a| a.id == article.id) {
            Some(slot) => {
                *slot = article;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }
}
