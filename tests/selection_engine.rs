use std::time::Duration;

use bulletin_core::application::{ApplicationError, dto::WorkflowStateDto, timeout::StoreDeadline};
use bulletin_core::domain::article::{ArticleId, Category, Country};
use bulletin_core::domain::selection::{ArticleFilter, SelectionTab};

mod support;
use support::{ArticleBuilder, InMemoryStore, NewsletterBuilder, harness, harness_with_deadline};

fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::with_articles(vec![
        ArticleBuilder::new(1)
            .title("DBS expands wealth desk")
            .country(Country::Singapore)
            .category(Category::WealthManagement)
            .build(),
        ArticleBuilder::new(2)
            .title("MUFG core migration")
            .company("MUFG")
            .country(Country::Japan)
            .category(Category::CoreBanking)
            .selected()
            .build(),
        ArticleBuilder::new(3)
            .title("ANZ payments outage")
            .country(Country::Australia)
            .category(Category::Payments)
            .selected()
            .build(),
        ArticleBuilder::new(4)
            .title("Maybank AML fine")
            .summary("Regulator cites KYC gaps at Maybank")
            .country(Country::Malaysia)
            .category(Category::AmlKyc)
            .build(),
        ArticleBuilder::new(5).title("   ").build(),
    ]);
    store.seed_newsletter(NewsletterBuilder::new(1).articles(&[3]).build());
    store
}

#[tokio::test]
async fn load_state_orders_selected_first_and_drops_untitled_rows() {
    let h = harness(seeded_store());
    let state = h.services.article_queries.load_state().await.unwrap();

    let ids: Vec<i64> = state.articles().iter().map(|a| a.id.0).collect();
    assert_eq!(ids, vec![2, 3, 1, 4]);
    assert_eq!(state.selected_count(), 2);
    assert_eq!(state.pending_ids(), vec![ArticleId(2)]);
}

#[tokio::test]
async fn toggling_twice_restores_the_original_flag() {
    let h = harness(seeded_store());
    let mut state = h.services.article_queries.load_state().await.unwrap();

    let first = h.services.article_commands.toggle_in(&mut state, 1).await.unwrap();
    assert!(first.selected_for_newsletter);
    assert_eq!(first.state, WorkflowStateDto::Selected);
    assert!(state.find(ArticleId(1)).unwrap().selected_for_newsletter);
    assert!(h.store.article(1).selected_for_newsletter);

    let second = h.services.article_commands.toggle_in(&mut state, 1).await.unwrap();
    assert!(!second.selected_for_newsletter);
    assert!(!state.find(ArticleId(1)).unwrap().selected_for_newsletter);
    assert!(!h.store.article(1).selected_for_newsletter);
    assert_eq!(h.store.write_calls(), 2);
}

#[tokio::test]
async fn toggling_an_unknown_article_is_not_found_and_writes_nothing() {
    let h = harness(seeded_store());
    let mut state = h.services.article_queries.load_state().await.unwrap();
    let before = state.clone();

    let err = h.services.article_commands.toggle_in(&mut state, 99).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(state, before);
    assert_eq!(h.store.write_calls(), 0);
}

#[tokio::test]
async fn published_articles_cannot_be_toggled() {
    let h = harness(seeded_store());
    let mut state = h.services.article_queries.load_state().await.unwrap();
    let before = state.clone();

    let err = h.services.article_commands.toggle_in(&mut state, 3).await.unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidState(_)));
    assert_eq!(state, before);
    assert_eq!(h.store.write_calls(), 0);

    let err = h.services.article_commands.toggle_selection(3).await.unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidState(_)));
    assert!(h.store.article(3).published_in_newsletter);
}

#[tokio::test]
async fn failed_writes_leave_the_state_untouched() {
    let h = harness(seeded_store());
    let mut state = h.services.article_queries.load_state().await.unwrap();
    let before = state.clone();
    h.store.fail_writes(true);

    for _ in 0..2 {
        let err = h.services.article_commands.toggle_in(&mut state, 1).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
    assert_eq!(state, before);
    assert!(!h.store.article(1).selected_for_newsletter);
}

#[tokio::test]
async fn refresh_reloads_and_clears_on_failure() {
    let h = harness(seeded_store());
    let mut state = h.services.article_queries.load_state().await.unwrap();

    h.services.article_commands.toggle_selection(4).await.unwrap();
    let count = h.services.article_commands.refresh(&mut state).await.unwrap();
    assert_eq!(count, 4);
    assert!(state.find(ArticleId(4)).unwrap().selected_for_newsletter);

    h.store.fail_reads(true);
    let err = h.services.article_commands.refresh(&mut state).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Fetch(_)));
    assert!(state.is_empty());
}

#[tokio::test]
async fn list_applies_country_category_search_and_tab() {
    let h = harness(seeded_store());
    let queries = &h.services.article_queries;

    let japan = queries
        .list_articles(&ArticleFilter::default().with_country(Country::Japan))
        .await
        .unwrap();
    assert_eq!(japan.items.len(), 1);
    assert_eq!(japan.items[0].id, 2);

    let payments = queries
        .list_articles(&ArticleFilter::default().with_category(Category::Payments))
        .await
        .unwrap();
    assert_eq!(payments.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);

    let kyc = queries
        .list_articles(&ArticleFilter::default().with_search("  kyc gaps "))
        .await
        .unwrap();
    assert_eq!(kyc.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4]);

    let selected = queries
        .list_articles(&ArticleFilter::default().with_tab(SelectionTab::Selected))
        .await
        .unwrap();
    assert_eq!(selected.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3]);

    let featured = queries
        .list_articles(&ArticleFilter::default().with_tab(SelectionTab::Featured))
        .await
        .unwrap();
    assert_eq!(featured.items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 4]);

    let all = queries.list_articles(&ArticleFilter::default()).await.unwrap();
    assert_eq!(all.total, 4);
    assert_eq!(all.selected_count, 2);
}

#[tokio::test]
async fn selection_overview_splits_pending_and_published() {
    let h = harness(seeded_store());
    let overview = h.services.article_queries.selection_overview().await.unwrap();

    assert_eq!(overview.selected.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(overview.published.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);
}

#[tokio::test]
async fn recording_a_view_bumps_the_counter() {
    let h = harness(seeded_store());
    h.services.article_commands.record_article_view(1).await.unwrap();
    h.services.article_commands.record_article_view(1).await.unwrap();
    assert_eq!(h.store.article(1).views, 2);

    let err = h.services.article_commands.record_article_view(0).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test(start_paused = true)]
async fn stalled_writes_time_out_without_touching_state() {
    let h = harness_with_deadline(seeded_store(), StoreDeadline::new(Duration::from_secs(2)));
    let mut state = h.services.article_queries.load_state().await.unwrap();
    let before = state.clone();
    h.store.stall_writes(true);

    let err = h.services.article_commands.toggle_in(&mut state, 1).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Timeout(_)));
    assert_eq!(state, before);
    assert!(!h.store.article(1).selected_for_newsletter);
}
