// src/application/queries/newsletters/reader.rs
use super::NewsletterQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CountryGroupDto, ReaderViewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, Country},
        newsletter::NewsletterId,
    },
};

pub const OTHER_COUNTRY_GROUP: &str = "Other";

impl NewsletterQueryService {
    /// Loads a newsletter for reading and counts the visit.
    ///
    /// A failed view count is logged and otherwise ignored.
    #[tracing::instrument(skip(self))]
    pub async fn reader_view(&self, newsletter_id: i64) -> ApplicationResult<ReaderViewDto> {
        let id = NewsletterId::new(newsletter_id)?;
        let newsletter = self
            .deadline
            .read("find newsletter", self.newsletter_repo.find_by_id(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("newsletter {id} not found")))?;

        if let Err(err) = self
            .deadline
            .write("increment newsletter views", self.view_counter.increment_views(id))
            .await
        {
            tracing::warn!(newsletter_id = %id, error = %err, "failed to record newsletter view");
        }

        let articles = self
            .deadline
            .read("find newsletter articles", self.article_repo.find_by_ids(&newsletter.article_ids))
            .await?;

        Ok(ReaderViewDto {
            newsletter: newsletter.into(),
            groups: group_by_country(articles),
        })
    }
}

/// Groups in enumerated country order, with country-less articles last under "Other".
/// Empty groups are omitted.
fn group_by_country(articles: Vec<Article>) -> Vec<CountryGroupDto> {
    let mut buckets: Vec<(Option<Country>, Vec<ArticleDto>)> = Country::ALL
        .into_iter()
        .map(Some)
        .chain(std::iter::once(None))
        .map(|country| (country, Vec::new()))
        .collect();

    for article in articles {
        let country = article.country;
        if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == country) {
            bucket.push(article.into());
        }
    }

    buckets
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(country, articles)| CountryGroupDto {
            country: country
                .map(|c| c.as_str())
                .unwrap_or(OTHER_COUNTRY_GROUP)
                .to_string(),
            articles,
        })
        .collect()
}
