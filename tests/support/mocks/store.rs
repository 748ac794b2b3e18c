// tests/support/mocks/store.rs
use async_trait::async_trait;
use bulletin_core::domain::{
    analyst::{Analyst, AnalystId, AnalystRepository, Email, NewAnalyst},
    article::{
        Article, ArticleFlagsUpdate, ArticleId, ArticleReadRepository, ArticleWriteRepository,
    },
    errors::{DomainError, DomainResult},
    newsletter::{
        NewNewsletter, Newsletter, NewsletterId, NewsletterReadRepository,
        NewsletterWriteRepository,
    },
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use std::time::Duration;

#[derive(Default)]
struct Tables {
    articles: Vec<Article>,
    newsletters: Vec<Newsletter>,
    analysts: Vec<Analyst>,
}

/// One in-memory store backing every repository trait, with switches to
/// simulate outages.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_publish: AtomicBool,
    stall_writes: AtomicBool,
    write_calls: AtomicUsize,
    publish_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().articles = articles;
        store
    }

    pub fn seed_newsletter(&self, newsletter: Newsletter) {
        let mut tables = self.tables.lock().unwrap();
        for id in &newsletter.article_ids {
            if let Some(article) = tables.articles.iter_mut().find(|a| a.id == *id) {
                article.mark_published(newsletter.id);
            }
        }
        tables.newsletters.push(newsletter);
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    pub fn fail_publish(&self, on: bool) {
        self.fail_publish.store(on, Ordering::SeqCst);
    }

    pub fn stall_writes(&self, on: bool) {
        self.stall_writes.store(on, Ordering::SeqCst);
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn publish_calls(&self) -> usize {
        self.publish_calls.load(Ordering::SeqCst)
    }

    pub fn article(&self, id: i64) -> Article {
        self.tables
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| a.id == ArticleId(id))
            .cloned()
            .expect("article seeded")
    }

    pub fn articles(&self) -> Vec<Article> {
        self.tables.lock().unwrap().articles.clone()
    }

    pub fn newsletters(&self) -> Vec<Newsletter> {
        self.tables.lock().unwrap().newsletters.clone()
    }

    fn check_read(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("store unreachable".into()))
        } else {
            Ok(())
        }
    }

    async fn check_write(&self) -> DomainResult<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.stall_writes.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("write rejected".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.check_read()?;
        let mut articles: Vec<Article> = self
            .articles()
            .into_iter()
            .filter(|a| !a.title.trim().is_empty())
            .collect();
        articles.sort_by(|a, b| {
            b.selected_for_newsletter
                .cmp(&a.selected_for_newsletter)
                .then(a.id.0.cmp(&b.id.0))
        });
        Ok(articles)
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        self.check_read()?;
        Ok(self
            .articles()
            .into_iter()
            .filter(|a| a.published_in_newsletter)
            .collect())
    }

    async fn find_by_ids(&self, ids: &[ArticleId]) -> DomainResult<Vec<Article>> {
        self.check_read()?;
        Ok(self
            .articles()
            .into_iter()
            .filter(|a| ids.contains(&a.id))
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn update_flags(&self, update: ArticleFlagsUpdate) -> DomainResult<Article> {
        self.check_write().await?;
        let mut tables = self.tables.lock().unwrap();
        let article = tables
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))?;
        update.apply(article);
        Ok(article.clone())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        self.check_write().await?;
        let mut tables = self.tables.lock().unwrap();
        let article = tables
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        article.views += 1;
        Ok(())
    }
}

#[async_trait]
impl NewsletterReadRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Newsletter>> {
        self.check_read()?;
        let mut newsletters = self.newsletters();
        newsletters.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        Ok(newsletters)
    }

    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>> {
        self.check_read()?;
        Ok(self.newsletters().into_iter().find(|n| n.id == id))
    }
}

#[async_trait]
impl NewsletterWriteRepository for InMemoryStore {
    async fn publish(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        self.publish_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("transaction aborted".into()));
        }
        self.check_write().await?;

        let mut tables = self.tables.lock().unwrap();
        let eligible = newsletter.article_ids.iter().all(|id| {
            tables
                .articles
                .iter()
                .any(|a| a.id == *id && a.is_pending_selection())
        });
        if !eligible {
            return Err(DomainError::Conflict("article changed state".into()));
        }

        let next_id = tables.newsletters.iter().map(|n| n.id.0).max().unwrap_or(0) + 1;
        let stored = Newsletter {
            id: NewsletterId(next_id),
            title: newsletter.title,
            description: newsletter.description,
            publish_date: newsletter.publish_date,
            banner_image: newsletter.banner_image,
            views: 0,
            unique_readers: 0,
            article_ids: newsletter.article_ids,
        };
        for article in tables.articles.iter_mut() {
            if stored.contains(article.id) {
                article.mark_published(stored.id);
            }
        }
        tables.newsletters.push(stored.clone());
        Ok(stored)
    }

    async fn increment_views(&self, id: NewsletterId) -> DomainResult<()> {
        self.check_write().await?;
        let mut tables = self.tables.lock().unwrap();
        let newsletter = tables
            .newsletters
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("newsletter {id} not found")))?;
        newsletter.views += 1;
        Ok(())
    }
}

#[async_trait]
impl AnalystRepository for InMemoryStore {
    async fn insert(&self, analyst: NewAnalyst) -> DomainResult<Analyst> {
        self.check_write().await?;
        let mut tables = self.tables.lock().unwrap();
        if tables.analysts.iter().any(|a| a.email == analyst.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let stored = Analyst {
            id: AnalystId(tables.analysts.len() as i64 + 1),
            email: analyst.email,
            display_name: analyst.display_name,
            password_hash: analyst.password_hash,
            created_at: analyst.created_at,
        };
        tables.analysts.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Analyst>> {
        self.check_read()?;
        Ok(self
            .tables
            .lock()
            .unwrap()
            .analysts
            .iter()
            .find(|a| &a.email == email)
            .cloned())
    }
}
