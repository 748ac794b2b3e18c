// src/domain/analytics.rs
//! Read-only rollups over article and newsletter collections.
//!
//! Groupings skip articles that lack the grouped dimension and are sorted by
//! value descending; ties keep first-encountered order.

use crate::domain::article::Article;
use crate::domain::newsletter::Newsletter;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicationDistribution {
    pub published: u64,
    pub selected: u64,
    pub not_selected: u64,
}

impl PublicationDistribution {
    pub fn total(&self) -> u64 {
        self.published + self.selected + self.not_selected
    }
}

fn dimension_label(article: &Article, dimension: Dimension) -> Option<&'static str> {
    match dimension {
        Dimension::Category => article.category.map(|c| c.as_str()),
        Dimension::Country => article.country.map(|c| c.as_str()),
    }
}

fn group_by<F>(articles: &[Article], dimension: Dimension, weight: F) -> Vec<NamedValue>
where
    F: Fn(&Article) -> u64,
{
    let mut groups: Vec<NamedValue> = Vec::new();
    for article in articles {
        let Some(label) = dimension_label(article, dimension) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.name == label) {
            Some(group) => group.value = group.value.saturating_add(weight(article)),
            None => groups.push(NamedValue {
                name: label.to_string(),
                value: weight(article),
            }),
        }
    }
    // `sort_by` is stable, so equal values stay in first-seen order.
    groups.sort_by(|a, b| b.value.cmp(&a.value));
    groups
}

pub fn count_by(articles: &[Article], dimension: Dimension) -> Vec<NamedValue> {
    group_by(articles, dimension, |_| 1)
}

pub fn count_by_category(articles: &[Article]) -> Vec<NamedValue> {
    count_by(articles, Dimension::Category)
}

pub fn count_by_country(articles: &[Article]) -> Vec<NamedValue> {
    count_by(articles, Dimension::Country)
}

pub fn views_by_dimension(articles: &[Article], dimension: Dimension) -> Vec<NamedValue> {
    group_by(articles, dimension, |a| a.views)
}

pub fn publication_distribution(articles: &[Article]) -> PublicationDistribution {
    articles
        .iter()
        .fold(PublicationDistribution::default(), |mut acc, article| {
            if article.published_in_newsletter {
                acc.published += 1;
            } else if article.selected_for_newsletter {
                acc.selected += 1;
            } else {
                acc.not_selected += 1;
            }
            acc
        })
}

/// Newsletters with the most views, ties in input order.
pub fn top_newsletters_by_views(newsletters: &[Newsletter], limit: usize) -> Vec<&Newsletter> {
    let mut ranked: Vec<&Newsletter> = newsletters.iter().collect();
    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(limit);
    ranked
}
