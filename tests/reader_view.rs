use bulletin_core::application::ApplicationError;
use bulletin_core::application::queries::newsletters::OTHER_COUNTRY_GROUP;
use bulletin_core::domain::article::Country;

mod support;
use support::{ArticleBuilder, InMemoryStore, NewsletterBuilder, harness};

fn reader_store() -> InMemoryStore {
    let store = InMemoryStore::with_articles(vec![
        ArticleBuilder::new(1).country(Country::Thailand).build(),
        ArticleBuilder::new(2).build(),
        ArticleBuilder::new(3).country(Country::Australia).build(),
        ArticleBuilder::new(4).country(Country::Thailand).build(),
        ArticleBuilder::new(5).country(Country::Japan).build(),
    ]);
    store.seed_newsletter(
        NewsletterBuilder::new(1)
            .views(9)
            .articles(&[1, 2, 3, 4])
            .build(),
    );
    store
}

#[tokio::test]
async fn groups_follow_country_order_with_other_last() {
    let h = harness(reader_store());
    let view = h.services.newsletter_queries.reader_view(1).await.unwrap();

    let countries: Vec<&str> = view.groups.iter().map(|g| g.country.as_str()).collect();
    assert_eq!(countries, vec!["Australia", "Thailand", OTHER_COUNTRY_GROUP]);

    let thailand: Vec<i64> = view.groups[1].articles.iter().map(|a| a.id).collect();
    assert_eq!(thailand, vec![1, 4]);
    assert_eq!(view.groups[2].articles[0].id, 2);
    assert_eq!(view.newsletter.article_count, 4);
}

#[tokio::test]
async fn each_read_counts_a_view() {
    let h = harness(reader_store());
    h.services.newsletter_queries.reader_view(1).await.unwrap();
    h.services.newsletter_queries.reader_view(1).await.unwrap();
    assert_eq!(h.store.newsletters()[0].views, 11);
}

#[tokio::test]
async fn view_counter_failure_does_not_block_reading() {
    let h = harness(reader_store());
    h.store.fail_writes(true);

    let view = h.services.newsletter_queries.reader_view(1).await.unwrap();
    assert_eq!(view.groups.len(), 3);
    assert_eq!(h.store.newsletters()[0].views, 9);
}

#[tokio::test]
async fn unknown_newsletter_is_not_found() {
    let h = harness(reader_store());
    let err = h.services.newsletter_queries.reader_view(77).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn gallery_lists_newest_first() {
    let store = reader_store();
    store.seed_newsletter(NewsletterBuilder::new(2).days_ago(3).articles(&[5]).build());
    store.seed_newsletter(NewsletterBuilder::new(3).days_ago(1).build());
    let h = harness(store);

    let gallery = h.services.newsletter_queries.newsletter_gallery().await.unwrap();
    let ids: Vec<i64> = gallery.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}
